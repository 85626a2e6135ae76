//! Authorization error types.

use custodia_core::error::CustodiaError;
use thiserror::Error;

/// Denial outcomes from the authorization gate.
///
/// The two variants are deliberately distinct so callers can route an
/// unauthenticated caller to a sign-in challenge and an
/// under-privileged one to an "unauthorized" surface.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No recognized principal (or no active admin standing — the two
    /// are indistinguishable by design, so admin emails cannot be
    /// probed).
    #[error("not authenticated")]
    Unauthenticated,

    /// Active admin session with insufficient role or permission. The
    /// message never names the missing permission.
    #[error("insufficient privileges")]
    Forbidden,
}

impl From<AuthError> for CustodiaError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => CustodiaError::Unauthenticated,
            AuthError::Forbidden => CustodiaError::AuthorizationDenied {
                reason: "insufficient privileges".into(),
            },
        }
    }
}
