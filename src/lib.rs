pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::resolve::{resolve, CallPlan};
pub use crate::core::validator::validate;
pub use crate::domain::model::{
    Config, Service, ServiceIntegration, ServiceIntegrationAuth, ServiceIntegrator,
};
pub use crate::utils::error::{IntegratorError, Result, ValidationError};
pub use crate::utils::validation::Validate;
