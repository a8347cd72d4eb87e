//! Lockstep walk over two aligned series

use robust_core::{Error, MetricSeries, Result};

/// Value substituted for both sides when either side is absent
pub const MISSING: f64 = f64::NAN;

/// One synchronized position
#[derive(Debug, Clone, Copy)]
pub struct SyncedPair {
    /// Value from the first series, or [`MISSING`]
    pub x: f64,
    /// Value from the second series, or [`MISSING`]
    pub y: f64,
    /// Whether either input was absent at this position
    pub missing: bool,
}

/// Iterator yielding one [`SyncedPair`] per position of two equal-length series
///
/// A gap in either series replaces *both* values with [`MISSING`], so the two
/// windows fed from this iterator stay aligned in time.
#[derive(Debug, Clone)]
pub struct PairSynchronizer<'a> {
    first: &'a MetricSeries,
    second: &'a MetricSeries,
    position: usize,
}

impl<'a> PairSynchronizer<'a> {
    /// Pair up two series of the same length
    ///
    /// Both series must also be internally consistent (see
    /// [`MetricSeries::validate`]).
    pub fn new(first: &'a MetricSeries, second: &'a MetricSeries) -> Result<Self> {
        first.validate()?;
        second.validate()?;
        if first.len() != second.len() {
            return Err(Error::size_mismatch(
                first.len(),
                second.len(),
                &format!("series pair ({}, {})", first.name, second.name),
            ));
        }
        Ok(Self {
            first,
            second,
            position: 0,
        })
    }
}

impl Iterator for PairSynchronizer<'_> {
    type Item = SyncedPair;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.position;
        if i >= self.first.len() {
            return None;
        }
        self.position += 1;

        let missing = self.first.is_absent[i] || self.second.is_absent[i];
        Some(if missing {
            SyncedPair {
                x: MISSING,
                y: MISSING,
                missing,
            }
        } else {
            SyncedPair {
                x: self.first.values[i],
                y: self.second.values[i],
                missing,
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.first.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairSynchronizer<'_> {}
