//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

use sqlx::migrate::Migrator;

pub mod persistence;

/// Schema migrations bundled from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
