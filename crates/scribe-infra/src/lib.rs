//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! the SeaORM-backed blog repository and the disk-backed upload store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL database support via SeaORM

pub mod database;
pub mod storage;

pub use database::DatabaseConnections;
pub use storage::DiskStorage;

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
