//! Database module: models and storage for train positions.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: loading of the external DDL script
//! - `sqlite.rs`: pool setup, schema execution, snapshot persistence

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::TrainPositionRow;
pub use schema::load_ddl;
pub use sqlite::{connect, PositionStore, SqlitePool};
