//! Common transport-layer types shared between the forecast server and the frontend.
//! These structs mirror the `/get_data` payload so both sides deserialize the
//! same shape without duplicating it.

mod forecast;
mod metric;

pub use forecast::{ForecastPoint, ForecastSeries, SeriesError};
pub use metric::{Metric, UnknownMetric};
