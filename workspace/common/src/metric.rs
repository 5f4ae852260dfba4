use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Forecastable data series offered by the dashboard.
///
/// The wire form (query strings, JSON, CSV headers, file names) is the
/// display name, e.g. `"Revenue"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Metric {
    Revenue,
    Sessions,
    Conversions,
}

impl Metric {
    /// Every metric, in the order the selection control lists them.
    pub const ALL: [Metric; 3] = [Metric::Revenue, Metric::Sessions, Metric::Conversions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue",
            Metric::Sessions => "Sessions",
            Metric::Conversions => "Conversions",
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::ALL[0]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known metric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| {
                tracing::debug!("Rejected metric name: {}", s);
                UnknownMetric(s.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_metrics_in_declared_order() {
        let names: Vec<&str> = Metric::ALL.iter().map(Metric::as_str).collect();
        assert_eq!(names, vec!["Revenue", "Sessions", "Conversions"]);

        let unique: HashSet<_> = Metric::ALL.iter().collect();
        assert_eq!(unique.len(), Metric::ALL.len());
    }

    #[test]
    fn test_parse_known_metrics() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "revenue".parse::<Metric>().unwrap_err();
        assert_eq!(err, UnknownMetric("revenue".to_string()));
        assert_eq!(err.to_string(), "unknown metric 'revenue'");
        assert!("".parse::<Metric>().is_err());
    }

    #[test]
    fn test_wire_form_is_display_name() {
        let json = serde_json::to_string(&Metric::Conversions).unwrap();
        assert_eq!(json, "\"Conversions\"");

        let parsed: Metric = serde_json::from_str("\"Sessions\"").unwrap();
        assert_eq!(parsed, Metric::Sessions);
        assert_eq!(Metric::Sessions.to_string(), "Sessions");
    }

    #[test]
    fn test_default_is_first_listed() {
        assert_eq!(Metric::default(), Metric::Revenue);
    }
}
