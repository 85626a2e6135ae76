//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. Enums are stored as strings with
//! ASSERT constraints for validation.
//!
//! The audit log is append-only at the data layer: table permissions
//! deny update and delete, and all writes go through the privileged
//! `fn::log_admin_action` function rather than raw CREATE statements.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Principals (dev identity-provider stand-in)
-- =======================================================================
DEFINE TABLE principal SCHEMAFULL;
DEFINE FIELD email ON TABLE principal TYPE string;
DEFINE FIELD password_hash ON TABLE principal TYPE string;
DEFINE FIELD created_at ON TABLE principal TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_principal_email ON TABLE principal \
    COLUMNS email UNIQUE;

-- =======================================================================
-- Principal tokens (dev identity-provider stand-in)
-- =======================================================================
DEFINE TABLE principal_token SCHEMAFULL;
DEFINE FIELD token ON TABLE principal_token TYPE string;
DEFINE FIELD principal_id ON TABLE principal_token TYPE string;
DEFINE FIELD created_at ON TABLE principal_token TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_principal_token ON TABLE principal_token \
    COLUMNS token UNIQUE;
DEFINE INDEX idx_principal_token_principal ON TABLE principal_token \
    COLUMNS principal_id;

-- =======================================================================
-- Admin directory
-- =======================================================================
DEFINE TABLE admin_user SCHEMAFULL;
DEFINE FIELD principal_id ON TABLE admin_user TYPE string;
DEFINE FIELD email ON TABLE admin_user TYPE string;
DEFINE FIELD role ON TABLE admin_user TYPE string \
    ASSERT $value IN ['moderator', 'admin', 'super_admin'];
DEFINE FIELD permissions ON TABLE admin_user TYPE object FLEXIBLE \
    DEFAULT {};
DEFINE FIELD is_active ON TABLE admin_user TYPE bool DEFAULT true;
DEFINE FIELD created_at ON TABLE admin_user TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE admin_user TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD last_login_at ON TABLE admin_user TYPE option<datetime>;
DEFINE FIELD login_count ON TABLE admin_user TYPE int DEFAULT 0;
DEFINE INDEX idx_admin_user_principal ON TABLE admin_user \
    COLUMNS principal_id UNIQUE;
DEFINE INDEX idx_admin_user_email ON TABLE admin_user \
    COLUMNS email UNIQUE;

-- =======================================================================
-- Audit Log (append-only)
-- =======================================================================
DEFINE TABLE audit_log SCHEMAFULL
    PERMISSIONS
        FOR create FULL
        FOR select FULL
        FOR update NONE
        FOR delete NONE;
DEFINE FIELD admin_user_id ON TABLE audit_log TYPE string;
DEFINE FIELD action_type ON TABLE audit_log TYPE string \
    ASSERT $value IN ['login', 'logout', 'create', 'read', 'update', \
    'delete', 'export', 'bulk_action', 'settings_change', \
    'permission_change'];
DEFINE FIELD resource_type ON TABLE audit_log TYPE string;
DEFINE FIELD resource_id ON TABLE audit_log TYPE option<string>;
DEFINE FIELD resource_details ON TABLE audit_log TYPE object FLEXIBLE \
    DEFAULT {};
DEFINE FIELD changes ON TABLE audit_log TYPE object FLEXIBLE \
    DEFAULT {};
DEFINE FIELD status ON TABLE audit_log TYPE string \
    ASSERT $value IN ['success', 'failure', 'partial'] \
    DEFAULT 'success';
DEFINE FIELD error_message ON TABLE audit_log TYPE option<string>;
DEFINE FIELD ip_address ON TABLE audit_log TYPE option<string>;
DEFINE FIELD performed_at ON TABLE audit_log TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_audit_performed ON TABLE audit_log \
    COLUMNS performed_at;
DEFINE INDEX idx_audit_actor ON TABLE audit_log \
    COLUMNS admin_user_id;
DEFINE INDEX idx_audit_action ON TABLE audit_log \
    COLUMNS action_type;

-- =======================================================================
-- Privileged audit write path
-- =======================================================================
DEFINE FUNCTION fn::log_admin_action(
    $id: string,
    $admin_user_id: string,
    $action_type: string,
    $resource_type: string,
    $resource_id: option<string>,
    $resource_details: object,
    $changes: object,
    $status: string,
    $error_message: option<string>,
    $ip_address: option<string>
) {
    RETURN CREATE type::record('audit_log', $id) SET
        admin_user_id = $admin_user_id,
        action_type = $action_type,
        resource_type = $resource_type,
        resource_id = $resource_id,
        resource_details = $resource_details,
        changes = $changes,
        status = $status,
        error_message = $error_message,
        ip_address = $ip_address;
};

-- =======================================================================
-- Data-subject records (GDPR export / anonymization)
-- =======================================================================
DEFINE TABLE subject_record SCHEMAFULL;
DEFINE FIELD email ON TABLE subject_record TYPE string;
DEFINE FIELD first_name ON TABLE subject_record TYPE string;
DEFINE FIELD last_name ON TABLE subject_record TYPE string;
DEFINE FIELD phone ON TABLE subject_record TYPE option<string>;
DEFINE FIELD details ON TABLE subject_record TYPE object FLEXIBLE \
    DEFAULT {};
DEFINE FIELD created_at ON TABLE subject_record TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD anonymized_at ON TABLE subject_record \
    TYPE option<datetime>;
DEFINE INDEX idx_subject_email ON TABLE subject_record COLUMNS email;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
///
/// Exposed for testing with in-memory SurrealDB instances that
/// bypass the migration runner.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
