use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Process-wide service configuration.
///
/// Sources, later ones winning: an optional `configuration` file in the
/// working directory, then `APP__`-prefixed environment variables
/// (e.g. `APP__PORT=8080`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
