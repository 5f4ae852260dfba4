use axum::{
    extract::{Query, State},
    response::Json,
};
use common::{ForecastSeries, Metric};
use std::sync::Arc;
use tracing::instrument;

use crate::error::AppError;
use crate::schemas::{AppState, MetricQuery};

/// Resolve the `metric` query parameter
pub fn parse_metric(query: &MetricQuery) -> Result<Metric, AppError> {
    let name = query.metric.as_deref().ok_or(AppError::MissingMetric)?;
    Ok(name.parse::<Metric>()?)
}

/// Load a forecast, going to the store only on a cache miss
pub async fn load_forecast(state: &AppState, metric: Metric) -> Result<Arc<ForecastSeries>, AppError> {
    if let Some(series) = state.cache.get(&metric).await {
        tracing::trace!("Forecast for {} served from cache", metric);
        return Ok(series);
    }

    let series = Arc::new(state.store.load(metric).await?);
    state.cache.insert(metric, series.clone()).await;
    Ok(series)
}

/// Get the forecast series for a metric
#[utoipa::path(
    get,
    path = "/get_data",
    tag = "forecast",
    params(MetricQuery),
    responses(
        (status = 200, description = "Forecast retrieved successfully", body = ForecastSeries),
        (status = 400, description = "Missing or unknown metric", body = crate::schemas::ErrorResponse),
        (status = 404, description = "No forecast for this metric", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Forecast could not be read", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_data(
    Query(query): Query<MetricQuery>,
    State(state): State<AppState>,
) -> Result<Json<ForecastSeries>, AppError> {
    let metric = parse_metric(&query)?;
    let series = load_forecast(&state, metric).await?;

    tracing::info!("Serving {} forecast points for {}", series.len(), metric);
    Ok(Json(series.as_ref().clone()))
}
