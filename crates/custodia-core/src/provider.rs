//! Identity-provider boundary.
//!
//! Authentication principals are owned by an external identity provider;
//! Custodia only references them by id. Implementations adapt a managed
//! provider (or the dev stand-in in `custodia-db`) to this trait.

use uuid::Uuid;

use crate::context::RequestContext;
use crate::error::CustodiaResult;

/// An authentication principal as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
}

pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller's current principal from the request context.
    ///
    /// `Ok(None)` means no credentials or unknown credentials — a normal
    /// unauthenticated outcome, not an error. `Err` is reserved for
    /// provider outages, which callers must treat as fail-closed.
    fn resolve(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = CustodiaResult<Option<Principal>>> + Send;

    /// Create a new principal with the given credentials.
    fn create_principal(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = CustodiaResult<Principal>> + Send;

    /// Delete a principal. Used as the compensating action when a paired
    /// directory insert fails after principal creation.
    fn delete_principal(&self, id: Uuid) -> impl Future<Output = CustodiaResult<()>> + Send;

    /// Revoke the caller's current provider session, if any.
    fn sign_out(&self, ctx: &RequestContext) -> impl Future<Output = CustodiaResult<()>> + Send;
}
