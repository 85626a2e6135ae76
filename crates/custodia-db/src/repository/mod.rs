//! SurrealDB repository implementations.

mod admin;
mod audit;
mod subject;

pub use admin::SurrealAdminRepository;
pub use audit::SurrealAuditRepository;
pub use subject::SurrealSubjectRepository;
