//! Two-sample Kolmogorov–Smirnov distance
//!
//! The distance is the largest absolute gap between the empirical
//! cumulative distribution functions of two samples:
//!
//! D = sup_x |F₁(x) − F₂(x)|
//!
//! It lies in `[0, 1]`: `0` when both samples have identical empirical
//! distributions, `1` when their supports do not overlap.
//!
//! <https://en.wikipedia.org/wiki/Kolmogorov%E2%80%93Smirnov_test>

use num_traits::Float;
use robust_core::{compare_missing_first, TwoSampleStatistic};
use std::cmp::Ordering;

/// Two-sample Kolmogorov–Smirnov distance estimator
///
/// Only the distance statistic is computed, not a p-value.
///
/// Missing markers (NaN) are ordered below every number and compare equal to
/// each other, so any input produces a finite result. Callers that want gaps
/// ignored must filter them out beforehand (see [`crate::MissingPolicy`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct KolmogorovSmirnov;

impl KolmogorovSmirnov {
    /// Create a new estimator
    pub fn new() -> Self {
        Self
    }
}

impl<T: Float> TwoSampleStatistic<T> for KolmogorovSmirnov {
    fn statistic_sorted(&self, sorted1: &[T], sorted2: &[T]) -> f64 {
        let n1 = sorted1.len();
        let n2 = sorted2.len();
        if n1 == 0 || n2 == 0 {
            return 0.0;
        }
        let en1 = n1 as f64;
        let en2 = n2 as f64;

        let mut i = 0;
        let mut j = 0;
        let mut distance = 0.0_f64;

        // Once either side is exhausted its CDF sits at 1 and the gap only shrinks.
        while i < n1 && j < n2 {
            let current = match compare_missing_first(&sorted1[i], &sorted2[j]) {
                Ordering::Greater => sorted2[j],
                _ => sorted1[i],
            };

            // Consume the whole run of `current` on both sides so ties are
            // evaluated at the step, never halfway through it.
            while i < n1 && compare_missing_first(&sorted1[i], &current) == Ordering::Equal {
                i += 1;
            }
            while j < n2 && compare_missing_first(&sorted2[j], &current) == Ordering::Equal {
                j += 1;
            }

            let gap = (i as f64 / en1 - j as f64 / en2).abs();
            if gap > distance {
                distance = gap;
            }
        }

        distance
    }

    fn name(&self) -> &'static str {
        "kolmogorov-smirnov"
    }
}

/// Kolmogorov–Smirnov distance of two samples, sorting both in place
///
/// Destructive: pass copies of anything that must keep its order.
pub fn ks_distance(sample1: &mut [f64], sample2: &mut [f64]) -> f64 {
    TwoSampleStatistic::<f64>::statistic(&KolmogorovSmirnov, sample1, sample2)
}
