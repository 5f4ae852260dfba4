use crate::router::create_router;
use crate::schemas::AppState;
use crate::store::{ForecastStore, StoreError};
use async_trait::async_trait;
use axum::Router;
use common::{ForecastSeries, Metric};
use moka::future::Cache;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Store backed by a map, counting how often it is hit
#[derive(Debug, Default)]
pub struct InMemoryForecastStore {
    pub forecasts: HashMap<Metric, ForecastSeries>,
    pub loads: AtomicUsize,
}

impl InMemoryForecastStore {
    pub fn with(forecasts: impl IntoIterator<Item = (Metric, ForecastSeries)>) -> Self {
        Self {
            forecasts: forecasts.into_iter().collect(),
            loads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ForecastStore for InMemoryForecastStore {
    async fn load(&self, metric: Metric) -> Result<ForecastSeries, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.forecasts
            .get(&metric)
            .cloned()
            .ok_or(StoreError::NotFound(metric))
    }

    async fn available(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| self.forecasts.contains_key(metric))
            .collect()
    }
}

/// Two observed points followed by three forecast points
pub fn sample_series() -> ForecastSeries {
    ForecastSeries {
        dates: vec![
            "2024/01/01".to_string(),
            "2024/01/02".to_string(),
            "2024/01/03".to_string(),
            "2024/01/04".to_string(),
            "2024/01/05".to_string(),
        ],
        real_values: vec![Some(100.0), Some(110.0), None, None, None],
        predicted_values: vec![Some(98.5), Some(111.25), Some(115.0), Some(118.0), Some(121.5)],
        upper_bound: vec![Some(105.0), Some(118.0), Some(124.0), Some(129.0), Some(134.0)],
        lower_bound: vec![Some(92.0), Some(104.5), Some(106.0), Some(107.0), Some(109.0)],
    }
}

/// AppState over an in-memory store holding a Revenue and a Sessions forecast
pub fn setup_test_app_state() -> (AppState, Arc<InMemoryForecastStore>) {
    let store = Arc::new(InMemoryForecastStore::with([
        (Metric::Revenue, sample_series()),
        (Metric::Sessions, sample_series()),
    ]));
    let cache = Cache::new(100);

    let state = AppState {
        store: store.clone(),
        cache,
    };
    (state, store)
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing, serving static files from `static_dir`
pub fn setup_test_app_with_static(static_dir: &Path) -> (Router, Arc<InMemoryForecastStore>) {
    let (state, store) = setup_test_app_state();
    (create_router(state, static_dir), store)
}

/// Create axum app for testing
pub fn setup_test_app() -> (Router, Arc<InMemoryForecastStore>) {
    setup_test_app_with_static(Path::new("does-not-exist"))
}
