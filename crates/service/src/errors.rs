use models::errors::ModelError;
use thiserror::Error;

pub const AIRLINE_NOT_FOUND: &str = "The aerolinea with the given id was not found";
pub const AIRPORT_NOT_FOUND: &str = "The aeropuerto with the given id was not found";
pub const AIRPORT_NOT_ASSOCIATED: &str = "The aeropuerto with the given id is not associated to the aerolinea";

/// Coarse classification used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    NotAssociated,
    Infrastructure,
}

/// Business errors carry their fixed message verbatim; `Db` wraps store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotAssociated(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn airline_not_found() -> Self { Self::NotFound(AIRLINE_NOT_FOUND.into()) }

    pub fn airport_not_found() -> Self { Self::NotFound(AIRPORT_NOT_FOUND.into()) }

    pub fn airport_not_associated() -> Self { Self::NotAssociated(AIRPORT_NOT_ASSOCIATED.into()) }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::BadRequest(_) => ErrorKind::BadRequest,
            ServiceError::NotAssociated(_) => ErrorKind::NotAssociated,
            ServiceError::Db(_) => ErrorKind::Infrastructure,
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 2001,
            ServiceError::BadRequest(_) => 2002,
            ServiceError::NotAssociated(_) => 2003,
            ServiceError::Db(_) => 2100,
        }
    }

    pub fn is_business(&self) -> bool { self.kind() != ErrorKind::Infrastructure }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::BadRequest(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
