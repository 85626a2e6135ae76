//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Authorization-path lookups are
//! always scoped to active records; coordination (uniqueness, atomic
//! counter increments, append-only audit writes) is delegated to the
//! backing store's transactional guarantees.

use uuid::Uuid;

use crate::error::CustodiaResult;
use crate::models::{
    admin::{AdminUser, CreateAdminUser, UpdateAdminUser},
    audit::{AuditFilter, AuditLogEntry, CreateAuditLogEntry},
    subject::{CreateSubjectRecord, SubjectRecord},
};

/// Admin directory store.
pub trait AdminRepository: Send + Sync {
    fn create(&self, input: CreateAdminUser)
    -> impl Future<Output = CustodiaResult<AdminUser>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = CustodiaResult<AdminUser>> + Send;

    /// Look up the admin record for an authentication principal, scoped
    /// to `is_active = true`. Inactive admins are indistinguishable from
    /// non-admins on this path.
    fn get_active_by_principal(
        &self,
        principal_id: Uuid,
    ) -> impl Future<Output = CustodiaResult<AdminUser>> + Send;

    fn update(
        &self,
        id: Uuid,
        input: UpdateAdminUser,
    ) -> impl Future<Output = CustodiaResult<AdminUser>> + Send;

    /// Record a successful session resolution: a single atomic
    /// `login_count` increment plus `last_login_at = now`. The counter is
    /// advisory telemetry, not a security control.
    fn record_login(&self, id: Uuid) -> impl Future<Output = CustodiaResult<()>> + Send;
}

/// Append-only audit store.
pub trait AuditRepository: Send + Sync {
    /// Append an entry via the store's privileged audit write path.
    /// Id and timestamp are server-assigned.
    fn append(
        &self,
        input: CreateAuditLogEntry,
    ) -> impl Future<Output = CustodiaResult<AuditLogEntry>> + Send;

    /// Query entries matching the filter, newest first. `filter.limit`
    /// must already be clamped by the caller.
    fn query(
        &self,
        filter: AuditFilter,
    ) -> impl Future<Output = CustodiaResult<Vec<AuditLogEntry>>> + Send;
}

/// Data-subject store for GDPR export and anonymization.
pub trait SubjectRepository: Send + Sync {
    fn create(
        &self,
        input: CreateSubjectRecord,
    ) -> impl Future<Output = CustodiaResult<SubjectRecord>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = CustodiaResult<Vec<SubjectRecord>>> + Send;

    /// Anonymize all records for the given email in place. Returns the
    /// number of rows affected; zero is not an error (idempotent).
    fn anonymize_by_email(&self, email: &str) -> impl Future<Output = CustodiaResult<u64>> + Send;
}
