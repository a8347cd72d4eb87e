//! Handling of missing markers inside window snapshots
//!
//! A gap in either input puts a NaN marker into *both* windows at the same
//! position. This module decides what the statistic sees of those markers.

use serde::{Deserialize, Serialize};

/// How missing markers in a window snapshot are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Drop marked positions from both samples before comparing
    #[default]
    Exclude,
    /// Keep markers and order them below every value
    SortLowest,
    /// Emit an absent point whenever either window holds a marker
    MarkAbsent,
}

impl MissingPolicy {
    /// Stable, user-facing label for logs and configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::SortLowest => "sort_lowest",
            Self::MarkAbsent => "mark_absent",
        }
    }
}

/// Outcome of preparing a pair of snapshots for the statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prepared {
    /// The buffers are ready to be compared
    Compare,
    /// The position must be emitted as absent
    Absent,
}

/// Apply `policy` to a pair of snapshot buffers in place
///
/// Under [`MissingPolicy::Exclude`] a position is dropped from both buffers
/// when either side holds a marker there, so the buffers stay aligned and
/// equally long.
pub fn prepare(policy: MissingPolicy, sample1: &mut Vec<f64>, sample2: &mut Vec<f64>) -> Prepared {
    match policy {
        MissingPolicy::SortLowest => Prepared::Compare,
        MissingPolicy::MarkAbsent => {
            if sample1.iter().chain(sample2.iter()).any(|v| v.is_nan()) {
                Prepared::Absent
            } else {
                Prepared::Compare
            }
        }
        MissingPolicy::Exclude => {
            let mut kept = 0;
            for idx in 0..sample1.len().min(sample2.len()) {
                let (x, y) = (sample1[idx], sample2[idx]);
                if x.is_nan() || y.is_nan() {
                    continue;
                }
                sample1[kept] = x;
                sample2[kept] = y;
                kept += 1;
            }
            sample1.truncate(kept);
            sample2.truncate(kept);
            Prepared::Compare
        }
    }
}
