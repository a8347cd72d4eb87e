//! Core traits and types for windowed series comparison
//!
//! This crate provides the building blocks shared by the comparison
//! algorithms and the query-function layer:
//!
//! - [`MetricSeries`]: a named, fixed-step series with per-point absence flags
//! - [`SlidingWindow`]: a fixed-capacity circular buffer of recent samples
//! - [`TwoSampleStatistic`]: the seam for distribution-comparison statistics
//! - [`Error`] / [`Result`]: the unified error type
//!
//! # Example
//!
//! ```rust
//! use robust_core::{MetricSeries, SlidingWindow};
//!
//! let series = MetricSeries::from_values("web01.cpu", 0, 60, vec![1.0, 2.0, 3.0]).unwrap();
//! let mut window = SlidingWindow::new(2).unwrap();
//! for value in &series.values {
//!     window.push(*value);
//! }
//! assert_eq!(window.snapshot(), vec![2.0, 3.0]);
//! ```

pub mod error;
pub mod series;
pub mod traits;
pub mod window;

// Re-export core types
pub use error::{Error, Result};
pub use series::MetricSeries;
pub use traits::{compare_missing_first, sort_missing_first, TwoSampleStatistic};
pub use window::SlidingWindow;
