//! Domain models for Custodia.
//!
//! These are the core types shared across all crates.

pub mod admin;
pub mod audit;
pub mod session;
pub mod subject;
