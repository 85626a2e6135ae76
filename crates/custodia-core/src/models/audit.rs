//! Audit log domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a sensitive administrative action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionType {
    Login,
    Logout,
    Create,
    Read,
    Update,
    Delete,
    Export,
    BulkAction,
    SettingsChange,
    PermissionChange,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Login => "login",
            ActionType::Logout => "logout",
            ActionType::Create => "create",
            ActionType::Read => "read",
            ActionType::Update => "update",
            ActionType::Delete => "delete",
            ActionType::Export => "export",
            ActionType::BulkAction => "bulk_action",
            ActionType::SettingsChange => "settings_change",
            ActionType::PermissionChange => "permission_change",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "login" => Some(ActionType::Login),
            "logout" => Some(ActionType::Logout),
            "create" => Some(ActionType::Create),
            "read" => Some(ActionType::Read),
            "update" => Some(ActionType::Update),
            "delete" => Some(ActionType::Delete),
            "export" => Some(ActionType::Export),
            "bulk_action" => Some(ActionType::BulkAction),
            "settings_change" => Some(ActionType::SettingsChange),
            "permission_change" => Some(ActionType::PermissionChange),
            _ => None,
        }
    }
}

/// Outcome of the audited action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuditStatus {
    #[default]
    Success,
    Failure,
    Partial,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Success => "success",
            AuditStatus::Failure => "failure",
            AuditStatus::Partial => "partial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(AuditStatus::Success),
            "failure" => Some(AuditStatus::Failure),
            "partial" => Some(AuditStatus::Partial),
            _ => None,
        }
    }
}

/// An immutable record of a sensitive administrative action.
///
/// Written once through the privileged store function and never mutated
/// or deleted by application code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    /// The acting admin's id.
    pub admin_user_id: Uuid,
    pub action_type: ActionType,
    /// Free-form resource category (e.g. `admin_user`, `user_data`).
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub resource_details: serde_json::Value,
    /// Before/after or delta description for mutating actions.
    pub changes: serde_json::Value,
    pub status: AuditStatus,
    pub error_message: Option<String>,
    pub ip_address: Option<String>,
    /// Server-assigned timestamp.
    pub performed_at: DateTime<Utc>,
}

/// Input for an audit append (id and timestamp are server-assigned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    pub admin_user_id: Uuid,
    pub action_type: ActionType,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub resource_details: serde_json::Value,
    pub changes: serde_json::Value,
    pub status: AuditStatus,
    pub error_message: Option<String>,
    pub ip_address: Option<String>,
}

impl CreateAuditLogEntry {
    /// A success entry with empty detail objects.
    pub fn new(
        admin_user_id: Uuid,
        action_type: ActionType,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            admin_user_id,
            action_type,
            resource_type: resource_type.into(),
            resource_id: None,
            resource_details: serde_json::Value::Object(Default::default()),
            changes: serde_json::Value::Object(Default::default()),
            status: AuditStatus::Success,
            error_message: None,
            ip_address: None,
        }
    }

    pub fn resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    pub fn resource_details(mut self, details: serde_json::Value) -> Self {
        self.resource_details = details;
        self
    }

    pub fn changes(mut self, changes: serde_json::Value) -> Self {
        self.changes = changes;
        self
    }

    pub fn failure(mut self, message: impl Into<String>) -> Self {
        self.status = AuditStatus::Failure;
        self.error_message = Some(message.into());
        self
    }

    pub fn ip_address(mut self, ip: Option<String>) -> Self {
        self.ip_address = ip;
        self
    }
}

/// Filters for audit log queries. All fields optional; `limit` is
/// defaulted and clamped by the service layer.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub admin_user_id: Option<Uuid>,
    pub action_type: Option<ActionType>,
    pub resource_type: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
}
