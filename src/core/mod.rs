pub mod resolve;
pub mod validator;

pub use crate::domain::model::{Config, Service, ServiceIntegration, ServiceIntegrator};
pub use crate::utils::error::Result;
