//! Windowed two-sample comparison of aligned metric series
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`robust_core`]: series, sliding windows, errors
//! - [`robust_ks`]: the windowed Kolmogorov–Smirnov runner
//! - [`robust_expr`]: the query-function table

pub use robust_core;
pub use robust_expr;
pub use robust_ks;

pub use robust_core::{Error, MetricSeries, Result, SlidingWindow, TwoSampleStatistic};
pub use robust_ks::{ks_test2, KolmogorovSmirnov, MissingPolicy, RunnerConfig, WindowedRunner};
