use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub seatmap: SeatMapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per persisted slice.
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatMapConfig {
    #[serde(default = "default_max_cols")]
    pub max_cols: usize,
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self { max_cols: default_max_cols() }
    }
}

fn default_max_cols() -> usize { skybook_core::seatmap::DEFAULT_MAX_COLS }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SKYBOOK__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
