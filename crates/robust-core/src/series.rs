//! Named metric series with per-point presence flags

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fixed-step metric series
///
/// Every point carries a raw value and an `absent` flag. Absent points keep
/// whatever value the producer stored (conventionally `0.0`); readers must
/// consult the flag rather than the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SeriesFields")]
pub struct MetricSeries {
    /// Series name, e.g. `servers.web01.cpu`
    pub name: String,
    /// Timestamp of the first point, in seconds
    pub start_time: i64,
    /// End of the covered range (exclusive), in seconds
    pub stop_time: i64,
    /// Seconds between consecutive points
    pub step: i64,
    /// Raw point values
    pub values: Vec<f64>,
    /// Presence flags, parallel to `values`
    pub is_absent: Vec<bool>,
}

/// Unchecked wire form, validated into [`MetricSeries`] on deserialization
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesFields {
    name: String,
    start_time: i64,
    stop_time: i64,
    step: i64,
    values: Vec<f64>,
    is_absent: Vec<bool>,
}

impl TryFrom<SeriesFields> for MetricSeries {
    type Error = Error;

    fn try_from(fields: SeriesFields) -> Result<Self> {
        let series = Self {
            name: fields.name,
            start_time: fields.start_time,
            stop_time: fields.stop_time,
            step: fields.step,
            values: fields.values,
            is_absent: fields.is_absent,
        };
        series.validate()?;
        Ok(series)
    }
}

impl MetricSeries {
    /// Create a series from parallel value and absence vectors
    pub fn new(
        name: impl Into<String>,
        start_time: i64,
        step: i64,
        values: Vec<f64>,
        is_absent: Vec<bool>,
    ) -> Result<Self> {
        let stop_time = start_time.saturating_add(step.saturating_mul(values.len() as i64));
        let series = Self {
            name: name.into(),
            start_time,
            stop_time,
            step,
            values,
            is_absent,
        };
        series.validate()?;
        Ok(series)
    }

    /// Check the structural invariants
    ///
    /// The fields are public, so a series assembled by hand can break them;
    /// consumers that index both vectors call this first.
    pub fn validate(&self) -> Result<()> {
        if self.values.len() != self.is_absent.len() {
            return Err(Error::size_mismatch(
                self.values.len(),
                self.is_absent.len(),
                &format!("absence flags of series {}", self.name),
            ));
        }
        if self.step <= 0 {
            return Err(Error::InvalidParameter(format!(
                "Series step must be positive, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Create a series where every point is present
    pub fn from_values(
        name: impl Into<String>,
        start_time: i64,
        step: i64,
        values: Vec<f64>,
    ) -> Result<Self> {
        let is_absent = vec![false; values.len()];
        Self::new(name, start_time, step, values, is_absent)
    }

    /// Create a series from optional points, `None` marking a gap
    pub fn from_options(
        name: impl Into<String>,
        start_time: i64,
        step: i64,
        points: &[Option<f64>],
    ) -> Result<Self> {
        let values = points.iter().map(|p| p.unwrap_or(0.0)).collect();
        let is_absent = points.iter().map(Option::is_none).collect();
        Self::new(name, start_time, step, values, is_absent)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` when the point is absent or out of range
    pub fn get(&self, index: usize) -> Option<f64> {
        match self.is_absent.get(index) {
            Some(false) => self.values.get(index).copied(),
            _ => None,
        }
    }

    /// Iterate over points as options
    pub fn points(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .zip(&self.is_absent)
            .map(|(&v, &absent)| if absent { None } else { Some(v) })
    }

    /// Count of absent points
    pub fn absent_count(&self) -> usize {
        self.is_absent.iter().filter(|&&a| a).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_covers_range() {
        let series = MetricSeries::from_values("a", 100, 10, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.start_time, 100);
        assert_eq!(series.stop_time, 130);
        assert_eq!(series.absent_count(), 0);
    }

    #[test]
    fn test_from_options_marks_gaps() {
        let series =
            MetricSeries::from_options("a", 0, 60, &[Some(1.0), None, Some(3.0)]).unwrap();
        assert_eq!(series.is_absent, vec![false, true, false]);
        assert_eq!(series.values[1], 0.0);
        assert_eq!(series.get(0), Some(1.0));
        assert_eq!(series.get(1), None);
        assert_eq!(series.get(7), None);
        assert_eq!(
            series.points().collect::<Vec<_>>(),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn test_rejects_mismatched_flags() {
        let result = MetricSeries::new("a", 0, 1, vec![1.0, 2.0], vec![false]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let result = MetricSeries::from_values("a", 0, 0, vec![1.0]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let series = MetricSeries::from_values("cpu", 0, 60, vec![0.5]).unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["startTime"], 0);
        assert_eq!(json["stopTime"], 60);
        assert_eq!(json["isAbsent"][0], false);

        let back: MetricSeries = serde_json::from_value(json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_deserialize_rejects_ragged_flags() {
        let json = r#"{"name":"a","startTime":0,"stopTime":30,"step":10,
            "values":[1.0,2.0,3.0],"isAbsent":[false]}"#;
        let err = serde_json::from_str::<MetricSeries>(json).unwrap_err();
        assert!(err.to_string().contains("absence flags of series a"));
    }

    #[test]
    fn test_deserialize_rejects_non_positive_step() {
        let json = r#"{"name":"a","startTime":0,"stopTime":0,"step":0,
            "values":[],"isAbsent":[]}"#;
        assert!(serde_json::from_str::<MetricSeries>(json).is_err());
    }

    #[test]
    fn test_validate_catches_hand_built_series() {
        let mut series = MetricSeries::from_values("a", 0, 10, vec![1.0, 2.0]).unwrap();
        assert!(series.validate().is_ok());
        series.is_absent.pop();
        assert!(matches!(series.validate(), Err(Error::InvalidInput(_))));
    }
}
