use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::UnknownMetric;
use thiserror::Error;

use crate::forecast_csv::CsvFormatError;
use crate::schemas::ErrorResponse;
use crate::store::StoreError;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing 'metric' query parameter")]
    MissingMetric,
    #[error(transparent)]
    UnknownMetric(#[from] UnknownMetric),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to render CSV: {0}")]
    Export(#[from] CsvFormatError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingMetric | AppError::UnknownMetric(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingMetric => "MISSING_METRIC",
            AppError::UnknownMetric(_) => "UNKNOWN_METRIC",
            AppError::Store(StoreError::NotFound(_)) => "FORECAST_NOT_FOUND",
            AppError::Store(_) => "FORECAST_UNREADABLE",
            AppError::Export(_) => "EXPORT_FAILED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Metric;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::MissingMetric.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(UnknownMetric("Bounces".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(StoreError::NotFound(Metric::Revenue)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(CsvFormatError::MissingColumn("Date".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unknown_metric_message_is_passed_through() {
        let err = AppError::from(UnknownMetric("Bounces".to_string()));
        assert_eq!(err.to_string(), "unknown metric 'Bounces'");
        assert_eq!(err.code(), "UNKNOWN_METRIC");
    }
}
