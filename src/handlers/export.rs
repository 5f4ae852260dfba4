use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::instrument;

use crate::error::AppError;
use crate::forecast_csv;
use crate::handlers::forecast::{load_forecast, parse_metric};
use crate::schemas::{AppState, MetricQuery};
use crate::store::CsvForecastStore;

/// Download the forecast for a metric as CSV
#[utoipa::path(
    get,
    path = "/export_csv",
    tag = "forecast",
    params(MetricQuery),
    responses(
        (status = 200, description = "Forecast table as CSV attachment", content_type = "text/csv", body = String),
        (status = 400, description = "Missing or unknown metric", body = crate::schemas::ErrorResponse),
        (status = 404, description = "No forecast for this metric", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Forecast could not be exported", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn export_csv(
    Query(query): Query<MetricQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metric = parse_metric(&query)?;
    let series = load_forecast(&state, metric).await?;
    let body = forecast_csv::to_csv_string(metric, &series)?;

    tracing::info!("Exporting {} forecast rows for {}", series.len(), metric);
    let disposition = format!("attachment; filename={}", CsvForecastStore::file_name(metric));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
