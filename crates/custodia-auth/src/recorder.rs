//! Audit recorder — the single write/query surface for the audit trail.

use custodia_core::error::CustodiaResult;
use custodia_core::models::audit::{AuditFilter, AuditLogEntry, CreateAuditLogEntry};
use custodia_core::repository::AuditRepository;
use tracing::error;

/// Appends audit entries and serves compliance queries.
///
/// Writes are fail-open: a failed append is reported to the operational
/// log but never aborts the parent operation, so an audit-store outage
/// cannot take down the whole admin surface. Callers needing a
/// fail-closed compliance posture should use [`AuditRecorder::append`]
/// and propagate its error instead.
#[derive(Clone)]
pub struct AuditRecorder<L> {
    audit: L,
    default_limit: u64,
    max_limit: u64,
}

impl<L: AuditRepository> AuditRecorder<L> {
    pub fn new(audit: L, default_limit: u64, max_limit: u64) -> Self {
        Self {
            audit,
            default_limit,
            max_limit,
        }
    }

    /// Append an entry, swallowing (and logging) any store failure.
    pub async fn log(&self, entry: CreateAuditLogEntry) {
        if let Err(e) = self.audit.append(entry.clone()).await {
            error!(
                error = %e,
                action = entry.action_type.as_str(),
                resource_type = %entry.resource_type,
                "Failed to write audit entry"
            );
        }
    }

    /// Append an entry, propagating store failures to the caller.
    pub async fn append(&self, entry: CreateAuditLogEntry) -> CustodiaResult<AuditLogEntry> {
        self.audit.append(entry).await
    }

    /// Query the trail, newest first, with the configured default and
    /// maximum page size applied.
    pub async fn query(&self, mut filter: AuditFilter) -> CustodiaResult<Vec<AuditLogEntry>> {
        let limit = filter
            .limit
            .unwrap_or(self.default_limit)
            .min(self.max_limit);
        filter.limit = Some(limit);
        self.audit.query(filter).await
    }
}
