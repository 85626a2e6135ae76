//! Custodia Core — domain models, error vocabulary, and trait
//! boundaries for the admin access & audit subsystem.
//!
//! This crate does no I/O. Storage and identity-provider integrations
//! implement the traits in [`repository`] and [`provider`].

pub mod context;
pub mod error;
pub mod models;
pub mod provider;
pub mod repository;
