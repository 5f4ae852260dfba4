use async_trait::async_trait;
use common::{ForecastSeries, Metric};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::forecast_csv::{self, CsvFormatError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no forecast available for {0}")]
    NotFound(Metric),
    #[error("failed to read forecast for {metric}: {source}")]
    Io {
        metric: Metric,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed forecast for {metric}: {source}")]
    Format {
        metric: Metric,
        #[source]
        source: CsvFormatError,
    },
}

/// Source of precomputed forecasts.
#[async_trait]
pub trait ForecastStore: Send + Sync + std::fmt::Debug {
    /// Load the forecast table for one metric.
    async fn load(&self, metric: Metric) -> Result<ForecastSeries, StoreError>;

    /// Metrics that currently have a forecast.
    async fn available(&self) -> Vec<Metric>;
}

/// Reads `forecast_<Metric>.csv` files from a directory.
#[derive(Debug, Clone)]
pub struct CsvForecastStore {
    data_dir: PathBuf,
}

impl CsvForecastStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// File name used for a metric, shared with the export attachment name.
    pub fn file_name(metric: Metric) -> String {
        format!("forecast_{}.csv", metric)
    }

    pub fn path_for(&self, metric: Metric) -> PathBuf {
        self.data_dir.join(Self::file_name(metric))
    }
}

#[async_trait]
impl ForecastStore for CsvForecastStore {
    async fn load(&self, metric: Metric) -> Result<ForecastSeries, StoreError> {
        let path = self.path_for(metric);
        tracing::debug!("Loading forecast for {} from {}", metric, path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Forecast file missing: {}", path.display());
                return Err(StoreError::NotFound(metric));
            }
            Err(source) => return Err(StoreError::Io { metric, source }),
        };

        let series = forecast_csv::read_series(metric, bytes.as_slice())
            .map_err(|source| StoreError::Format { metric, source })?;

        tracing::info!("Loaded {} forecast points for {}", series.len(), metric);
        Ok(series)
    }

    async fn available(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        for metric in Metric::ALL {
            if tokio::fs::try_exists(self.path_for(metric)).await.unwrap_or(false) {
                metrics.push(metric);
            }
        }
        metrics
    }
}
