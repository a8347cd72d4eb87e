//! Windowed two-sample Kolmogorov–Smirnov comparison
//!
//! This crate compares two aligned metric series position by position. It
//! keeps a sliding window over each series and, once both windows are full,
//! reports the two-sample Kolmogorov–Smirnov distance between them at every
//! subsequent position.
//!
//! # Components
//!
//! - [`PairSynchronizer`]: walks both series in lockstep, marking a gap on
//!   *both* sides whenever either side is absent
//! - [`KolmogorovSmirnov`]: the distance statistic (no p-value)
//! - [`MissingPolicy`]: what the statistic sees of gap markers
//! - [`WindowedRunner`]: feeds the windows and assembles the output series
//!
//! # Example
//!
//! ```rust
//! use robust_core::MetricSeries;
//! use robust_ks::{RunnerConfig, WindowedRunner};
//!
//! let a = MetricSeries::from_values("a", 0, 60, vec![0.0, 0.0, 0.0, 0.0]).unwrap();
//! let b = MetricSeries::from_values("b", 0, 60, vec![10.0, 10.0, 10.0, 10.0]).unwrap();
//!
//! let runner = WindowedRunner::new(RunnerConfig::new(2).unwrap()).unwrap();
//! let out = runner.run(&a, &b, 0, 240).unwrap();
//!
//! assert_eq!(out.name, "kolmogorovSmirnovTest2(a,b,2)");
//! assert_eq!(out.is_absent, vec![true, true, false, false]);
//! assert_eq!(out.values[3], 1.0);
//! ```

mod config;
mod missing;
mod runner;
mod statistic;
mod sync;

// Re-exports
pub use config::{RunnerConfig, DEFAULT_FUNCTION_NAME};
pub use missing::{prepare, MissingPolicy, Prepared};
pub use runner::{ks_test2, RunStats, WindowedRunner};
pub use statistic::{ks_distance, KolmogorovSmirnov};
pub use sync::{PairSynchronizer, SyncedPair, MISSING};

// Convenience constructors
pub fn kolmogorov_smirnov() -> KolmogorovSmirnov {
    KolmogorovSmirnov::new()
}
