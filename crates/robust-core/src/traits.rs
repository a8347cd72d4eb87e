//! Core traits for two-sample comparison
//!
//! Algorithm-specific implementations (like the Kolmogorov–Smirnov distance)
//! live in their respective crates.
//!
//! # API Convention
//!
//! - Methods without suffix sort data in place (take `&mut [T]`)
//! - Methods with `_sorted` suffix require pre-sorted data (take `&[T]`)

use num_traits::Float;

/// Trait for statistics that compare the distributions of two samples
///
/// Implementations are pure: the same pair of samples always produces the
/// same statistic, independent of call order.
///
/// # Example
///
/// ```rust
/// use robust_core::TwoSampleStatistic;
///
/// struct MeanGap;
///
/// impl TwoSampleStatistic<f64> for MeanGap {
///     fn statistic_sorted(&self, sorted1: &[f64], sorted2: &[f64]) -> f64 {
///         let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
///         (mean(sorted1) - mean(sorted2)).abs()
///     }
///
///     fn name(&self) -> &'static str {
///         "mean-gap"
///     }
/// }
///
/// let mut a = vec![3.0, 1.0, 2.0];
/// let mut b = vec![5.0, 4.0, 6.0];
/// assert_eq!(MeanGap.statistic(&mut a, &mut b), 3.0);
/// assert_eq!(a, vec![1.0, 2.0, 3.0]);
/// ```
pub trait TwoSampleStatistic<T: Float = f64> {
    /// Compute the statistic, sorting both samples in place first
    ///
    /// The inputs are clobbered; pass disposable copies.
    fn statistic(&self, sample1: &mut [T], sample2: &mut [T]) -> f64 {
        sort_missing_first(sample1);
        sort_missing_first(sample2);
        self.statistic_sorted(sample1, sample2)
    }

    /// Compute the statistic from samples already sorted by [`sort_missing_first`]
    fn statistic_sorted(&self, sorted1: &[T], sorted2: &[T]) -> f64;

    /// Name used in logs and descriptions
    fn name(&self) -> &'static str;
}

/// Total order over floats where NaN compares equal to NaN and below every number
pub fn compare_missing_first<T: Float>(a: &T, b: &T) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort ascending in place, placing NaN markers before every number
pub fn sort_missing_first<T: Float>(data: &mut [T]) {
    data.sort_unstable_by(compare_missing_first);
}
