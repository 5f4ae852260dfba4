use common::{ForecastSeries, Metric};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::store::ForecastStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Source of forecast tables
    pub store: Arc<dyn ForecastStore>,
    /// Forecasts already loaded from the store
    pub cache: Cache<Metric, Arc<ForecastSeries>>,
}

/// Query parameters shared by the forecast endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MetricQuery {
    /// Metric display name (Revenue, Sessions or Conversions)
    pub metric: Option<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Metrics that currently have a forecast
    pub forecasts: Vec<Metric>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::get_data,
        crate::handlers::export::export_csv,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ForecastSeries,
            Metric,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Forecast data and CSV export"),
    ),
    info(
        title = "Forecast Dashboard API",
        description = "Serves precomputed metric forecasts to the dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
