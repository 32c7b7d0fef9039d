use crate::utils::error::ValidationError;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Rejects the exact empty string. Whitespace counts as a value.
pub fn require_non_empty(value: &str, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::bad_request(message));
    }
    Ok(())
}

pub fn require_at_least_one<T>(items: &[T], message: &str) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::bad_request(message));
    }
    Ok(())
}
