//! Admin user domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrative role tier.
///
/// Variants are declared in ascending order of privilege so the derived
/// `Ord` gives `Moderator < Admin < SuperAdmin` and tier checks are a
/// single comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdminRole {
    Moderator,
    Admin,
    SuperAdmin,
}

impl AdminRole {
    /// Storage string form (`moderator` / `admin` / `super_admin`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Moderator => "moderator",
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "super_admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "moderator" => Some(AdminRole::Moderator),
            "admin" => Some(AdminRole::Admin),
            "super_admin" => Some(AdminRole::SuperAdmin),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person granted administrative capability.
///
/// `principal_id` references the authentication principal owned by the
/// external identity provider; it is never duplicated here. Records are
/// soft-deleted (`is_active = false`), never removed, so audit entries
/// keep a valid actor reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub principal_id: Uuid,
    pub email: String,
    pub role: AdminRole,
    /// Fine-grained capability map (permission name -> enabled).
    pub permissions: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub login_count: u64,
}

impl AdminUser {
    /// Whether the named fine-grained permission is explicitly enabled.
    ///
    /// Only a literal `true` counts; absent or non-boolean values are
    /// disabled. Role ceilings (super_admin bypass) are applied by the
    /// authorization gate, not here.
    pub fn permission_enabled(&self, name: &str) -> bool {
        self.permissions
            .get(name)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminUser {
    pub principal_id: Uuid,
    pub email: String,
    pub role: AdminRole,
    pub permissions: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateAdminUser {
    pub permissions: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}
