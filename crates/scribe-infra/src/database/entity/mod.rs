//! SeaORM entities for the `blogs` table.

pub mod blog;
