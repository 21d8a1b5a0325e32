//! Database library providing connectors and utilities for MongoDB
//!
//! This library provides a unified interface for connecting to and managing
//! document-store connections.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support with the official driver
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("task_manager");
//! let collection = db.collection::<Document>("tasks");
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
