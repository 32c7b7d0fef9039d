use crate::domain::model::{Service, ServiceIntegrator};
use crate::utils::error::ValidationError;
use crate::utils::validation::{require_at_least_one, require_non_empty, Validate};

pub const NO_SERVICES: &str = "at least one service is required";
pub const MISSING_SERVICE_ID: &str = "service id is required";
pub const MISSING_SERVICE_URL: &str = "service url is required";

impl Validate for Service {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.id, MISSING_SERVICE_ID)?;
        require_non_empty(&self.url, MISSING_SERVICE_URL)
    }
}

impl Validate for ServiceIntegrator {
    /// Stops at the first violation, scanning services in order.
    fn validate(&self) -> Result<(), ValidationError> {
        require_at_least_one(&self.services, NO_SERVICES)?;
        self.services.iter().try_for_each(Validate::validate)
    }
}

pub fn validate(integrator: &ServiceIntegrator) -> Result<(), ValidationError> {
    integrator.validate()
}
