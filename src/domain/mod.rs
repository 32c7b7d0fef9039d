pub mod model;

pub use model::{Config, Service, ServiceIntegration, ServiceIntegrationAuth, ServiceIntegrator};
