//! The table definition lives in an external SQL script (by default
//! `initial-schema.sql` next to the binary) so the schema can evolve
//! without a rebuild. The script must stay idempotent
//! (`CREATE TABLE IF NOT EXISTS ...`); it is executed on every run.

use crate::error::VonatError;
use std::fs;
use std::path::Path;

/// Read the DDL script from the configured path.
pub fn load_ddl(path: &Path) -> Result<String, VonatError> {
    Ok(fs::read_to_string(path)?)
}
