use crate::error::VonatError;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Runtime configuration. Defaults below are overridable through
/// `VONAT_`-prefixed environment variables (e.g. `VONAT_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub schema_path: PathBuf,
    pub endpoint_url: Url,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:train_position.db".to_string(),
            schema_path: PathBuf::from("initial-schema.sql"),
            endpoint_url: Url::parse("https://vonatinfo.mav-start.hu/map.aspx/getData")
                .expect("default endpoint URL is valid"),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, VonatError> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("VONAT_"))
            .extract()
            .map_err(Into::into)
    }
}
