//! Error types for the Custodia system.
//!
//! Store- and provider-specific failures are converted into this small,
//! stable vocabulary at each component boundary so callers never branch
//! on backend-specific error shapes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustodiaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    /// No recognized principal: the caller must authenticate.
    /// Distinct from [`CustodiaError::AuthorizationDenied`] so callers
    /// can route to a sign-in challenge rather than an "unauthorized"
    /// surface.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Recognized principal with insufficient standing. The reason is
    /// intentionally generic and never names a missing permission.
    #[error("Authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CustodiaResult<T> = Result<T, CustodiaError>;
