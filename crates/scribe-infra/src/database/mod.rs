//! Database connection management and the blog repository.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
