//! Custodia Auth — session resolution, authorization gating, audit
//! recording, and the admin-management/compliance service.
//!
//! Generic over the `custodia-core` trait boundaries so this crate has
//! no dependency on the database crate.

pub mod config;
pub mod error;
pub mod gate;
pub mod recorder;
pub mod resolver;
pub mod service;

pub use config::AuthConfig;
pub use error::AuthError;
pub use gate::AuthorizationGate;
pub use recorder::AuditRecorder;
pub use resolver::SessionResolver;
pub use service::AdminService;
