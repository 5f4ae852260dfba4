use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use moka::future::Cache;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;
use crate::store::CsvForecastStore;

/// Server configuration.
///
/// Layered, lowest priority first: built-in defaults, an optional
/// `forecast-dashboard.{toml,yaml,json}` file in the working directory,
/// then `FORECAST_*` environment variables (`.env` is loaded first).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Directory holding `forecast_<Metric>.csv` files
    pub data_dir: PathBuf,
    /// Directory with the built frontend bundle
    pub static_dir: PathBuf,
    /// Seconds a loaded forecast stays cached
    pub cache_ttl_secs: u64,
    /// Maximum number of cached forecasts
    pub cache_capacity: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::layered(
            File::with_name("forecast-dashboard").required(false),
            Environment::with_prefix("FORECAST"),
        )
    }

    fn layered(
        file: File<FileSourceFile, FileFormat>,
        environment: Environment,
    ) -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("data_dir", "data")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .set_default("cache_ttl_secs", 300)?
            .set_default("cache_capacity", 100)?
            .add_source(file)
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to assemble configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply command line flags, which take precedence over every other layer
    pub fn with_overrides(
        mut self,
        bind_address: Option<String>,
        data_dir: Option<PathBuf>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        self
    }
}

/// Build shared handler state from configuration
pub fn initialize_app_state(config: &AppConfig) -> AppState {
    tracing::info!("Reading forecasts from {}", config.data_dir.display());
    let store = CsvForecastStore::new(&config.data_dir);

    let cache = Cache::builder()
        .max_capacity(config.cache_capacity)
        .time_to_live(Duration::from_secs(config.cache_ttl_secs))
        .build();

    AppState {
        store: Arc::new(store),
        cache,
    }
}
