use thiserror::Error;

pub const AIRPORT_CODE_LENGTH: &str = "The aeropuerto code should have 3 characters";
pub const AIRLINE_FOUNDATION_DATE: &str = "The aerolinea foundation date should be in the past";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
}

/// Rejects blank strings, naming the offending field.
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} should not be empty")));
    }
    Ok(())
}
