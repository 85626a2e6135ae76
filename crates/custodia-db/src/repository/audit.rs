//! SurrealDB implementation of [`AuditRepository`].
//!
//! Appends never issue a raw `CREATE audit_log`; they go through the
//! schema-defined `fn::log_admin_action` function so audit-write
//! authority is enforced at the data layer alongside the table's
//! deny-update/deny-delete permissions.

use chrono::{DateTime, Utc};
use custodia_core::error::CustodiaResult;
use custodia_core::models::audit::{
    ActionType, AuditFilter, AuditLogEntry, AuditStatus, CreateAuditLogEntry,
};
use custodia_core::repository::AuditRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for appends where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AuditRow {
    admin_user_id: String,
    action_type: String,
    resource_type: String,
    resource_id: Option<String>,
    resource_details: serde_json::Value,
    changes: serde_json::Value,
    status: String,
    error_message: Option<String>,
    ip_address: Option<String>,
    performed_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AuditRowWithId {
    record_id: String,
    admin_user_id: String,
    action_type: String,
    resource_type: String,
    resource_id: Option<String>,
    resource_details: serde_json::Value,
    changes: serde_json::Value,
    status: String,
    error_message: Option<String>,
    ip_address: Option<String>,
    performed_at: DateTime<Utc>,
}

fn parse_action(s: &str) -> Result<ActionType, DbError> {
    ActionType::parse(s).ok_or_else(|| DbError::Corrupt(format!("unknown action type: {s}")))
}

fn parse_status(s: &str) -> Result<AuditStatus, DbError> {
    AuditStatus::parse(s).ok_or_else(|| DbError::Corrupt(format!("unknown audit status: {s}")))
}

impl AuditRow {
    fn into_entry(self, id: Uuid) -> Result<AuditLogEntry, DbError> {
        let admin_user_id = Uuid::parse_str(&self.admin_user_id)
            .map_err(|e| DbError::Corrupt(format!("invalid actor UUID: {e}")))?;
        Ok(AuditLogEntry {
            id,
            admin_user_id,
            action_type: parse_action(&self.action_type)?,
            resource_type: self.resource_type,
            resource_id: self.resource_id,
            resource_details: self.resource_details,
            changes: self.changes,
            status: parse_status(&self.status)?,
            error_message: self.error_message,
            ip_address: self.ip_address,
            performed_at: self.performed_at,
        })
    }
}

impl AuditRowWithId {
    fn try_into_entry(self) -> Result<AuditLogEntry, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        let admin_user_id = Uuid::parse_str(&self.admin_user_id)
            .map_err(|e| DbError::Corrupt(format!("invalid actor UUID: {e}")))?;
        Ok(AuditLogEntry {
            id,
            admin_user_id,
            action_type: parse_action(&self.action_type)?,
            resource_type: self.resource_type,
            resource_id: self.resource_id,
            resource_details: self.resource_details,
            changes: self.changes,
            status: parse_status(&self.status)?,
            error_message: self.error_message,
            ip_address: self.ip_address,
            performed_at: self.performed_at,
        })
    }
}

/// SurrealDB implementation of the append-only audit store.
#[derive(Clone)]
pub struct SurrealAuditRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAuditRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AuditRepository for SurrealAuditRepository<C> {
    async fn append(&self, input: CreateAuditLogEntry) -> CustodiaResult<AuditLogEntry> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "RETURN fn::log_admin_action($id, $admin_user_id, \
                 $action_type, $resource_type, $resource_id, \
                 $resource_details, $changes, $status, \
                 $error_message, $ip_address)",
            )
            .bind(("id", id_str.clone()))
            .bind(("admin_user_id", input.admin_user_id.to_string()))
            .bind(("action_type", input.action_type.as_str().to_string()))
            .bind(("resource_type", input.resource_type))
            .bind(("resource_id", input.resource_id))
            .bind(("resource_details", input.resource_details))
            .bind(("changes", input.changes))
            .bind(("status", input.status.as_str().to_string()))
            .bind(("error_message", input.error_message))
            .bind(("ip_address", input.ip_address))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<AuditRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "audit_log".into(),
            id: id_str,
        })?;

        Ok(row.into_entry(id)?)
    }

    async fn query(&self, filter: AuditFilter) -> CustodiaResult<Vec<AuditLogEntry>> {
        let mut conds = Vec::new();
        if filter.admin_user_id.is_some() {
            conds.push("admin_user_id = $admin_user_id");
        }
        if filter.action_type.is_some() {
            conds.push("action_type = $action_type");
        }
        if filter.resource_type.is_some() {
            conds.push("resource_type = $resource_type");
        }
        if filter.date_from.is_some() {
            conds.push("performed_at >= $date_from");
        }
        if filter.date_to.is_some() {
            conds.push("performed_at <= $date_to");
        }

        let where_clause = if conds.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conds.join(" AND "))
        };

        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM audit_log {}\
             ORDER BY performed_at DESC LIMIT $limit",
            where_clause
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("limit", filter.limit.unwrap_or(100)));

        if let Some(admin_user_id) = filter.admin_user_id {
            builder = builder.bind(("admin_user_id", admin_user_id.to_string()));
        }
        if let Some(action_type) = filter.action_type {
            builder = builder.bind(("action_type", action_type.as_str().to_string()));
        }
        if let Some(resource_type) = filter.resource_type {
            builder = builder.bind(("resource_type", resource_type));
        }
        if let Some(date_from) = filter.date_from {
            builder = builder.bind(("date_from", date_from));
        }
        if let Some(date_to) = filter.date_to {
            builder = builder.bind(("date_to", date_to));
        }

        let mut result = builder.await.map_err(DbError::from)?;
        let rows: Vec<AuditRowWithId> = result.take(0).map_err(DbError::from)?;

        let entries = rows
            .into_iter()
            .map(|row| row.try_into_entry())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(entries)
    }
}
