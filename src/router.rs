use crate::handlers::{export::export_csv, forecast::get_data, health::health_check};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware.
///
/// Paths not matched by an API route are served from `static_dir`, which
/// holds the built dashboard (`index.html` for `/`).
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Forecast endpoints used by the dashboard
        .route("/get_data", get(get_data))
        .route("/export_csv", get(export_csv))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Dashboard bundle
        .fallback_service(ServeDir::new(static_dir))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
