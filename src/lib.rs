pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::VonatError;
pub use types::trains::Snapshot;
