//! Configuration for a windowed comparison run

use crate::MissingPolicy;
use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name stamped on output series unless overridden
pub const DEFAULT_FUNCTION_NAME: &str = "kolmogorovSmirnovTest2";

/// Parameters of one windowed comparison
///
/// Can be built in code or deserialized from a host configuration file:
///
/// ```rust
/// use robust_ks::{MissingPolicy, RunnerConfig};
///
/// let config = RunnerConfig::new(30)
///     .unwrap()
///     .with_missing_policy(MissingPolicy::MarkAbsent);
/// assert_eq!(config.window, 30);
///
/// let loaded: RunnerConfig = serde_json::from_str(r#"{ "window": 30 }"#).unwrap();
/// assert_eq!(loaded.missing_policy, MissingPolicy::Exclude);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Number of points in each sliding window
    pub window: usize,

    /// Treatment of gaps inside a window
    #[serde(default)]
    pub missing_policy: MissingPolicy,

    /// Function name used in the output series name
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

impl RunnerConfig {
    /// Create a configuration for the given window size
    pub fn new(window: usize) -> Result<Self> {
        let config = Self {
            window,
            missing_policy: MissingPolicy::default(),
            function_name: default_function_name(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the gap treatment
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Set the function name stamped on output series
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Check invariants that deserialization cannot enforce
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::invalid_window(self.window));
        }
        if self.function_name.is_empty() {
            return Err(Error::InvalidParameter(
                "Function name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
