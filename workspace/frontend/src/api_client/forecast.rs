use common::{ForecastSeries, Metric};
use crate::api_client;
use crate::settings;

/// Endpoint path (with query) of the forecast for `metric`
pub fn forecast_endpoint(metric: Metric) -> String {
    format!("/get_data?metric={}", metric)
}

/// Absolute or same-origin URL the browser navigates to for a CSV download
pub fn export_url(metric: Metric) -> String {
    settings::get_settings().api_url(&format!("/export_csv?metric={}", metric))
}

/// Fetch the forecast for `metric`.
///
/// A body whose columns differ in length is rejected like any other
/// malformed response.
pub async fn get_forecast(metric: Metric) -> Result<ForecastSeries, String> {
    log::trace!("Fetching forecast for metric: {}", metric);

    let series = api_client::get::<ForecastSeries>(&forecast_endpoint(metric)).await?;

    if let Err(e) = series.check_aligned() {
        let error_msg = format!("Malformed forecast for {}: {}", metric, e);
        log::error!("{}", error_msg);
        return Err(error_msg);
    }

    log::info!("Fetched {} forecast points for {}", series.len(), metric);
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_endpoint_carries_exact_metric() {
        for metric in Metric::ALL {
            assert_eq!(
                forecast_endpoint(metric),
                format!("/get_data?metric={}", metric.as_str())
            );
        }
        assert_eq!(forecast_endpoint(Metric::Sessions), "/get_data?metric=Sessions");
    }

    #[test]
    fn test_export_url_uses_settings_base() {
        assert_eq!(export_url(Metric::Revenue), "/export_csv?metric=Revenue");

        settings::update_settings(|s| s.api_base = "http://localhost:3000".to_string());
        assert_eq!(
            export_url(Metric::Conversions),
            "http://localhost:3000/export_csv?metric=Conversions"
        );
        settings::update_settings(|s| s.api_base = String::new());
    }
}
