//! CSV layout of a forecast table.
//!
//! The same layout is read from the data directory and served by
//! `/export_csv`:
//!
//! ```text
//! Date,Real Revenue,Predicted Revenue,Upper Bound,Lower Bound
//! 2024/01/01,120.5,118.25,130.1,106.4
//! 2024/04/01,,131.9,150.02,113.78
//! ```
//!
//! Empty cells are nulls. Values are written with two decimals.

use common::{ForecastPoint, ForecastSeries, Metric};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvFormatError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}

/// Column headers for a metric, in file order.
pub fn headers(metric: Metric) -> [String; 5] {
    [
        "Date".to_string(),
        format!("Real {}", metric),
        format!("Predicted {}", metric),
        "Upper Bound".to_string(),
        "Lower Bound".to_string(),
    ]
}

/// Parse a forecast table for `metric`. Columns are matched by header
/// name, extra columns are ignored.
pub fn read_series<R: Read>(metric: Metric, reader: R) -> Result<ForecastSeries, CsvFormatError> {
    let mut reader = csv::Reader::from_reader(reader);
    let header_row = reader.headers()?.clone();

    let wanted = headers(metric);
    let mut positions = [0usize; 5];
    for (slot, name) in positions.iter_mut().zip(&wanted) {
        *slot = header_row
            .iter()
            .position(|h| h.trim() == name.as_str())
            .ok_or_else(|| CsvFormatError::MissingColumn(name.clone()))?;
    }

    let mut points = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let cell = |column: usize| record.get(positions[column]).unwrap_or("").trim();
        let number = |column: usize| parse_cell(cell(column), &wanted[column], row);

        points.push(ForecastPoint {
            date: cell(0).to_string(),
            real: number(1)?,
            predicted: number(2)?,
            upper: number(3)?,
            lower: number(4)?,
        });
    }

    tracing::trace!("Parsed {} forecast rows for {}", points.len(), metric);
    Ok(ForecastSeries::from_points(points))
}

/// Write `series` as a forecast table for `metric`.
pub fn write_series<W: Write>(
    metric: Metric,
    series: &ForecastSeries,
    writer: W,
) -> Result<(), CsvFormatError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(headers(metric))?;

    for point in series.points() {
        writer.write_record([
            point.date,
            format_cell(point.real),
            format_cell(point.predicted),
            format_cell(point.upper),
            format_cell(point.lower),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Render `series` to an in-memory CSV document.
pub fn to_csv_string(metric: Metric, series: &ForecastSeries) -> Result<String, CsvFormatError> {
    let mut buffer = Vec::new();
    write_series(metric, series, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Empty cells and non-finite values (`nan`, `inf`, `-infinity`, ...) are nulls.
fn parse_cell(value: &str, column: &str, row: usize) -> Result<Option<f64>, CsvFormatError> {
    if value.is_empty() {
        return Ok(None);
    }
    let number = value
        .parse::<f64>()
        .map_err(|_| CsvFormatError::InvalidNumber {
            column: column.to_string(),
            row,
            value: value.to_string(),
        })?;
    Ok(number.is_finite().then_some(number))
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVENUE_CSV: &str = "\
Date,Real Revenue,Predicted Revenue,Upper Bound,Lower Bound
2024/01/01,120.5,118.25,130.1,106.4
2024/01/02,,131.9,150.02,113.78
";

    #[test]
    fn test_headers_follow_metric_name() {
        let headers = headers(Metric::Sessions);
        assert_eq!(headers[1], "Real Sessions");
        assert_eq!(headers[2], "Predicted Sessions");
        assert_eq!(headers[3], "Upper Bound");
    }

    #[test]
    fn test_read_series_with_gaps() {
        let series = read_series(Metric::Revenue, REVENUE_CSV.as_bytes()).unwrap();

        assert_eq!(series.dates, vec!["2024/01/01", "2024/01/02"]);
        assert_eq!(series.real_values, vec![Some(120.5), None]);
        assert_eq!(series.predicted_values, vec![Some(118.25), Some(131.9)]);
        assert_eq!(series.lower_bound, vec![Some(106.4), Some(113.78)]);
        assert!(series.check_aligned().is_ok());
    }

    #[test]
    fn test_read_series_reorders_columns_by_header() {
        let csv = "\
Lower Bound,Date,Upper Bound,Predicted Revenue,Real Revenue,Extra
1,d1,3,2,5,ignored
";
        let series = read_series(Metric::Revenue, csv.as_bytes()).unwrap();

        assert_eq!(series.dates, vec!["d1"]);
        assert_eq!(series.real_values, vec![Some(5.0)]);
        assert_eq!(series.predicted_values, vec![Some(2.0)]);
        assert_eq!(series.upper_bound, vec![Some(3.0)]);
        assert_eq!(series.lower_bound, vec![Some(1.0)]);
    }

    #[test]
    fn test_read_series_wrong_metric_column() {
        let err = read_series(Metric::Sessions, REVENUE_CSV.as_bytes()).unwrap_err();
        assert!(matches!(err, CsvFormatError::MissingColumn(ref c) if c == "Real Sessions"));
    }

    #[test]
    fn test_read_series_invalid_number() {
        let csv = "\
Date,Real Revenue,Predicted Revenue,Upper Bound,Lower Bound
d1,abc,1,2,0
";
        let err = read_series(Metric::Revenue, csv.as_bytes()).unwrap_err();
        match err {
            CsvFormatError::InvalidNumber { column, row, value } => {
                assert_eq!(column, "Real Revenue");
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nan_cells_are_nulls() {
        let csv = "\
Date,Real Revenue,Predicted Revenue,Upper Bound,Lower Bound
d1,NaN,1,2,0
";
        let series = read_series(Metric::Revenue, csv.as_bytes()).unwrap();
        assert_eq!(series.real_values, vec![None]);
    }

    #[test]
    fn test_infinite_cells_are_nulls_in_both_directions() {
        let csv = "\
Date,Real Revenue,Predicted Revenue,Upper Bound,Lower Bound
d1,1,2,inf,-infinity
";
        let series = read_series(Metric::Revenue, csv.as_bytes()).unwrap();
        assert_eq!(series.upper_bound, vec![None]);
        assert_eq!(series.lower_bound, vec![None]);

        let exported = to_csv_string(Metric::Revenue, &series).unwrap();
        assert_eq!(exported.lines().nth(1), Some("d1,1.00,2.00,,"));
    }

    #[test]
    fn test_write_series_rounds_and_blanks_nulls() {
        let series = ForecastSeries {
            dates: vec!["d1".to_string(), "d2".to_string()],
            real_values: vec![Some(10.0), None],
            predicted_values: vec![Some(9.876), Some(13.0)],
            upper_bound: vec![None, Some(15.004)],
            lower_bound: vec![None, Some(11.0)],
        };

        let csv = to_csv_string(Metric::Sessions, &series).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Date,Real Sessions,Predicted Sessions,Upper Bound,Lower Bound",
                "d1,10.00,9.88,,",
                "d2,,13.00,15.00,11.00",
            ]
        );
    }

    #[test]
    fn test_written_table_reads_back() {
        let series = read_series(Metric::Revenue, REVENUE_CSV.as_bytes()).unwrap();
        let csv = to_csv_string(Metric::Revenue, &series).unwrap();
        let reread = read_series(Metric::Revenue, csv.as_bytes()).unwrap();
        assert_eq!(reread, series);
    }
}
