use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

pub async fn serve(
    bind_address: Option<String>,
    data_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    trace!("Entering serve function");
    info!("Forecast dashboard starting up");

    let config = AppConfig::load()?.with_overrides(bind_address, data_dir, static_dir);
    debug!("Effective configuration: {:?}", config);

    if !config.static_dir.is_dir() {
        error!(
            "Frontend directory {} does not exist, only the API will be served",
            config.static_dir.display()
        );
    }

    // Initialize application state
    let state = initialize_app_state(&config);

    // Create router
    trace!("Creating application router");
    let app = create_router(state, &config.static_dir);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Forecast dashboard running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
