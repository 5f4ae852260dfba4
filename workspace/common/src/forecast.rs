use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Forecast payload served by `/get_data`.
///
/// Column oriented: index `i` of every sequence refers to the same date.
/// `real_values` is null for future dates, the predicted and bound
/// columns are null wherever the forecast has no value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ForecastSeries {
    /// Date labels
    pub dates: Vec<String>,
    /// Observed values
    pub real_values: Vec<Option<f64>>,
    /// Forecast values
    pub predicted_values: Vec<Option<f64>>,
    /// Upper edge of the confidence band
    pub upper_bound: Vec<Option<f64>>,
    /// Lower edge of the confidence band
    pub lower_bound: Vec<Option<f64>>,
}

/// One row of a [`ForecastSeries`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    pub date: String,
    pub real: Option<f64>,
    pub predicted: Option<f64>,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series '{field}' has {actual} values but 'dates' has {expected}")]
    Misaligned {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ForecastSeries {
    /// Number of time points, taken from `dates`.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Checks that every value column has one entry per date.
    pub fn check_aligned(&self) -> Result<(), SeriesError> {
        let expected = self.dates.len();
        let columns = [
            ("real_values", self.real_values.len()),
            ("predicted_values", self.predicted_values.len()),
            ("upper_bound", self.upper_bound.len()),
            ("lower_bound", self.lower_bound.len()),
        ];

        for (field, actual) in columns {
            if actual != expected {
                tracing::warn!("Misaligned forecast column {}: {} != {}", field, actual, expected);
                return Err(SeriesError::Misaligned {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Iterates the series row by row.
    ///
    /// Stops at the shortest column, so callers wanting every row should
    /// run [`ForecastSeries::check_aligned`] first.
    pub fn points(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.real_values)
            .zip(&self.predicted_values)
            .zip(&self.upper_bound)
            .zip(&self.lower_bound)
            .map(|((((date, real), predicted), upper), lower)| ForecastPoint {
                date: date.clone(),
                real: *real,
                predicted: *predicted,
                upper: *upper,
                lower: *lower,
            })
    }

    /// Builds the column form from rows. The result is always aligned.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = ForecastPoint>,
    {
        let mut series = Self::default();
        for point in points {
            series.dates.push(point.date);
            series.real_values.push(point.real);
            series.predicted_values.push(point.predicted);
            series.upper_bound.push(point.upper);
            series.lower_bound.push(point.lower);
        }
        series
    }
}
