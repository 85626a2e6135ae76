//! Admin session domain model.

use serde::{Deserialize, Serialize};

use super::admin::{AdminRole, AdminUser};

/// A request-scoped session resolution result.
///
/// Constructed fresh for every inbound operation and discarded when the
/// request completes; never cached across requests, so permission or
/// deactivation changes take effect on the next call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub admin: AdminUser,
    pub is_admin: bool,
    pub is_super_admin: bool,
}

impl AdminSession {
    pub fn new(admin: AdminUser) -> Self {
        let is_super_admin = admin.role == AdminRole::SuperAdmin;
        Self {
            admin,
            is_admin: true,
            is_super_admin,
        }
    }

    pub fn role(&self) -> AdminRole {
        self.admin.role
    }
}
