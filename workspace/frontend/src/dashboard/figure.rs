use common::ForecastSeries;
use plotly::common::{DashType, Fill, Line, Mode};
use plotly::Scatter;
use serde_json::{json, Value};

const REAL_COLOR: &str = "rgba(0, 0, 139, 1)";
const PREDICTED_COLOR: &str = "rgba(255, 0, 0, 1)";
const BAND_COLOR: &str = "rgba(135, 206, 235, 0.5)";

/// Everything Plotly needs to draw the forecast chart
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastFigure {
    pub traces: Vec<Value>,
    pub layout: Value,
    pub config: Value,
}

impl ForecastFigure {
    /// Four traces: real (solid), predicted (dashed), then upper and lower
    /// bound. The lower bound fills up to the upper bound, which draws the
    /// confidence band. Nulls stay nulls and show as gaps.
    pub fn build(series: &ForecastSeries) -> Result<Self, String> {
        let dates = series.dates.clone();

        let real = Scatter::new(dates.clone(), series.real_values.clone())
            .name("Real Values")
            .mode(Mode::Lines)
            .line(Line::new().color(REAL_COLOR).width(2.0));

        let predicted = Scatter::new(dates.clone(), series.predicted_values.clone())
            .name("Predicted Values")
            .mode(Mode::Lines)
            .line(Line::new().color(PREDICTED_COLOR).width(2.0).dash(DashType::Dash));

        let upper = Scatter::new(dates.clone(), series.upper_bound.clone())
            .name("Confidence Interval")
            .mode(Mode::Lines)
            .legend_group("confidence")
            .line(Line::new().color(BAND_COLOR).width(0.5));

        let lower = Scatter::new(dates, series.lower_bound.clone())
            .name("Lower Bound")
            .mode(Mode::Lines)
            .legend_group("confidence")
            .show_legend(false)
            .fill(Fill::ToNextY)
            .fill_color(BAND_COLOR)
            .line(Line::new().color(BAND_COLOR).width(0.5));

        let traces = [real, predicted, upper, lower]
            .iter()
            .map(|trace| serde_json::to_value(trace).map_err(|e| format!("Failed to serialize trace: {}", e)))
            .collect::<Result<Vec<_>, _>>()?;

        let layout = json!({
            "title": {"text": "Forecasting Analytics"},
            "hovermode": "x unified",
            "dragmode": "pan",
            "margin": {"t": 50, "r": 20, "l": 60, "b": 50},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "xaxis": {"title": {"text": "Date"}, "showgrid": false},
            "yaxis": {"title": {"text": "Value"}, "showgrid": true, "gridcolor": "#eee"},
            "legend": {"orientation": "h", "y": -0.2},
        });

        let config = json!({
            "responsive": true,
            "scrollZoom": true,
            "displaylogo": false,
        });

        Ok(Self { traces, layout, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_points() -> ForecastSeries {
        ForecastSeries {
            dates: (1..=5).map(|d| format!("2024/01/0{}", d)).collect(),
            real_values: vec![Some(10.0), Some(11.0), Some(12.0), None, None],
            predicted_values: vec![Some(9.5), Some(11.2), Some(12.1), Some(13.0), Some(14.0)],
            upper_bound: vec![Some(11.0), Some(12.5), Some(13.5), Some(15.0), Some(16.5)],
            lower_bound: vec![Some(8.0), Some(10.0), Some(10.5), Some(11.0), Some(11.5)],
        }
    }

    fn points(trace: &Value, axis: &str) -> usize {
        trace[axis].as_array().map(Vec::len).unwrap_or(0)
    }

    #[test]
    fn test_four_series_with_n_points_each() {
        let figure = ForecastFigure::build(&five_points()).unwrap();

        assert_eq!(figure.traces.len(), 4);
        for trace in &figure.traces {
            assert_eq!(trace["type"], "scatter");
            assert_eq!(points(trace, "x"), 5);
            assert_eq!(points(trace, "y"), 5);
        }
    }

    #[test]
    fn test_series_styles() {
        let figure = ForecastFigure::build(&five_points()).unwrap();
        let [real, predicted, upper, lower] = figure.traces.as_slice() else {
            panic!("expected four traces");
        };

        assert_eq!(real["name"], "Real Values");
        assert!(real["line"].get("dash").is_none());
        assert_eq!(predicted["line"]["dash"], "dash");
        assert!(upper.get("fill").is_none());
        assert_eq!(lower["fill"], "tonexty");
        assert_eq!(lower["showlegend"], false);
    }

    #[test]
    fn test_gaps_are_kept_as_nulls() {
        let series = ForecastSeries {
            dates: vec!["d1".to_string(), "d2".to_string()],
            real_values: vec![Some(10.0), Some(12.0)],
            predicted_values: vec![None, Some(13.0)],
            upper_bound: vec![None, Some(15.0)],
            lower_bound: vec![None, Some(11.0)],
        };

        let figure = ForecastFigure::build(&series).unwrap();

        assert_eq!(figure.traces.len(), 4);
        for trace in &figure.traces[1..] {
            assert_eq!(points(trace, "y"), 2);
            assert!(trace["y"][0].is_null());
        }
        assert_eq!(figure.traces[0]["y"][0], 10.0);
        assert_eq!(figure.traces[2]["y"][1], 15.0);
    }

    #[test]
    fn test_layout_axes_and_interaction() {
        let figure = ForecastFigure::build(&five_points()).unwrap();

        assert_eq!(figure.layout["xaxis"]["title"]["text"], "Date");
        assert_eq!(figure.layout["yaxis"]["title"]["text"], "Value");
        assert_eq!(figure.layout["dragmode"], "pan");
        assert_eq!(figure.config["scrollZoom"], true);
        assert_eq!(figure.layout["title"]["text"], "Forecasting Analytics");
    }

    #[test]
    fn test_empty_series_still_builds_four_traces() {
        let figure = ForecastFigure::build(&ForecastSeries::default()).unwrap();
        assert_eq!(figure.traces.len(), 4);
        assert_eq!(points(&figure.traces[0], "x"), 0);
    }
}
