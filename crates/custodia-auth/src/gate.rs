//! Authorization gate — role-tier and fine-grained permission checks.

use custodia_core::context::RequestContext;
use custodia_core::error::CustodiaResult;
use custodia_core::models::admin::AdminRole;
use custodia_core::models::session::AdminSession;
use custodia_core::provider::IdentityProvider;
use custodia_core::repository::{AdminRepository, AuditRepository};

use crate::error::AuthError;
use crate::resolver::SessionResolver;

/// Wraps protected operations, rejecting callers without a sufficiently
/// privileged active session.
pub struct AuthorizationGate<P, A, L> {
    resolver: SessionResolver<P, A, L>,
}

impl<P, A, L> AuthorizationGate<P, A, L>
where
    P: IdentityProvider,
    A: AdminRepository,
    L: AuditRepository,
{
    pub fn new(resolver: SessionResolver<P, A, L>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &SessionResolver<P, A, L> {
        &self.resolver
    }

    /// Require an active session at or above `minimum_role`.
    ///
    /// "Not authenticated" and "authenticated but under-privileged" are
    /// distinct outcomes so callers can route to sign-in versus an
    /// unauthorized surface. Role tiers are a total order, so the check
    /// is a single comparison.
    pub async fn require_role(
        &self,
        ctx: &RequestContext,
        minimum_role: AdminRole,
    ) -> Result<AdminSession, AuthError> {
        let session = self
            .resolver
            .resolve(ctx)
            .await
            .map_err(|_| AuthError::Unauthenticated)?;

        let Some(session) = session else {
            return Err(AuthError::Unauthenticated);
        };

        if session.role() < minimum_role {
            return Err(AuthError::Forbidden);
        }

        Ok(session)
    }

    /// Check a fine-grained permission by name.
    ///
    /// Super admins pass unconditionally (role ceiling overrides the
    /// permission map); everyone else gets exactly the stored value,
    /// with absent entries disabled.
    pub async fn has_permission(&self, ctx: &RequestContext, name: &str) -> CustodiaResult<bool> {
        let Some(session) = self.resolver.resolve(ctx).await? else {
            return Ok(false);
        };

        if session.is_super_admin {
            return Ok(true);
        }

        Ok(session.admin.permission_enabled(name))
    }
}
