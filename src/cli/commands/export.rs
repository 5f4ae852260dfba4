use anyhow::{Context, Result};
use common::Metric;
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;
use crate::forecast_csv;
use crate::store::{CsvForecastStore, ForecastStore};

pub async fn export(metric: &str, output: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<()> {
    let metric: Metric = metric.parse()?;

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.data_dir,
    };
    let output = output.unwrap_or_else(|| PathBuf::from(CsvForecastStore::file_name(metric)));

    let store = CsvForecastStore::new(&data_dir);
    let series = store.load(metric).await?;
    let body = forecast_csv::to_csv_string(metric, &series)?;

    tokio::fs::write(&output, body)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Exported {} rows for {} to {}", series.len(), metric, output.display());
    Ok(())
}
