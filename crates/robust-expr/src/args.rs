//! Function calls and typed argument access

use crate::interval::parse_interval;
use crate::{Error, Result};
use robust_core::MetricSeries;

/// A fully evaluated call argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Series resolved from a target; a wildcard may expand to many
    Series(Vec<MetricSeries>),
    /// Integer literal
    Integer(i64),
    /// Floating point literal
    Float(f64),
    /// Quoted string literal
    String(String),
}

impl Arg {
    /// Name of the argument kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Series(_) => "seriesList",
            Arg::Integer(_) => "integer",
            Arg::Float(_) => "float",
            Arg::String(_) => "string",
        }
    }
}

/// A call of a named function with evaluated arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    fn arg(&self, index: usize) -> Result<&Arg> {
        self.args.get(index).ok_or(Error::MissingArgument(index))
    }

    /// Require exactly `expected` arguments
    pub fn expect_arity(&self, expected: usize) -> Result<()> {
        if self.args.len() != expected {
            return Err(Error::ArgumentCount {
                function: self.name.clone(),
                expected,
                got: self.args.len(),
            });
        }
        Ok(())
    }

    /// Series list at `index`
    pub fn series_arg(&self, index: usize) -> Result<&[MetricSeries]> {
        match self.arg(index)? {
            Arg::Series(list) => Ok(list),
            other => Err(Error::TypeMismatch {
                index,
                expected: "seriesList",
                got: other.kind(),
            }),
        }
    }

    /// The single series at `index`; wildcards resolving to zero or several
    /// series are rejected
    pub fn single_series_arg(&self, index: usize) -> Result<&MetricSeries> {
        match self.series_arg(index)? {
            [series] => Ok(series),
            _ => Err(Error::WildcardNotAllowed),
        }
    }

    /// Integer at `index`
    pub fn int_arg(&self, index: usize) -> Result<i64> {
        match self.arg(index)? {
            Arg::Integer(value) => Ok(*value),
            other => Err(Error::TypeMismatch {
                index,
                expected: "integer",
                got: other.kind(),
            }),
        }
    }

    /// Window length in points at `index`
    ///
    /// Accepts a point count or an interval string, which is converted to
    /// points using `step` seconds per point.
    pub fn window_arg(&self, index: usize, step: i64) -> Result<usize> {
        let points = match self.arg(index)? {
            Arg::Integer(points) => *points,
            Arg::String(text) => {
                let seconds = parse_interval(text)?;
                if step <= 0 {
                    return Err(Error::InvalidInterval(format!(
                        "{text:?} cannot be converted with step {step}"
                    )));
                }
                seconds / step
            }
            other => {
                return Err(Error::TypeMismatch {
                    index,
                    expected: "integer or interval",
                    got: other.kind(),
                })
            }
        };

        usize::try_from(points)
            .ok()
            .filter(|&p| p > 0)
            .ok_or_else(|| robust_core::Error::invalid_window(points.max(0) as usize).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str) -> MetricSeries {
        MetricSeries::from_values(name, 0, 60, vec![1.0]).unwrap()
    }

    #[test]
    fn test_single_series_rejects_wildcards() {
        let call = Call::new(
            "f",
            vec![
                Arg::Series(vec![series("a")]),
                Arg::Series(vec![series("b"), series("c")]),
                Arg::Series(vec![]),
            ],
        );
        assert_eq!(call.single_series_arg(0).unwrap().name, "a");
        assert!(matches!(call.single_series_arg(1), Err(Error::WildcardNotAllowed)));
        assert!(matches!(call.single_series_arg(2), Err(Error::WildcardNotAllowed)));
        assert!(matches!(call.single_series_arg(3), Err(Error::MissingArgument(3))));
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        let call = Call::new("f", vec![Arg::Float(1.5), Arg::Integer(2)]);
        let err = call.int_arg(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch at argument 0: expected integer, got float"
        );
        assert!(matches!(
            call.series_arg(1),
            Err(Error::TypeMismatch { got: "integer", .. })
        ));
    }

    #[test]
    fn test_arity() {
        let call = Call::new("ksTest2", vec![Arg::Integer(1)]);
        assert!(call.expect_arity(1).is_ok());
        let err = call.expect_arity(3).unwrap_err();
        assert_eq!(err.to_string(), "ksTest2: expected 3 arguments, got 1");
    }

    #[test]
    fn test_window_from_points_or_interval() {
        let call = Call::new(
            "f",
            vec![
                Arg::Integer(12),
                Arg::String("10min".to_string()),
                Arg::String("30s".to_string()),
                Arg::Integer(0),
                Arg::Integer(-4),
                Arg::Float(3.0),
            ],
        );
        assert_eq!(call.window_arg(0, 60).unwrap(), 12);
        assert_eq!(call.window_arg(1, 60).unwrap(), 10);
        // Shorter than one step
        assert!(matches!(call.window_arg(2, 60), Err(Error::RobustCore(_))));
        assert!(matches!(call.window_arg(3, 60), Err(Error::RobustCore(_))));
        assert!(matches!(call.window_arg(4, 60), Err(Error::RobustCore(_))));
        assert!(matches!(call.window_arg(5, 60), Err(Error::TypeMismatch { .. })));
        assert!(matches!(call.window_arg(1, 0), Err(Error::InvalidInterval(_))));
    }
}
