//! Sliding-window comparison of two aligned series
//!
//! The runner walks both inputs in lockstep, keeps the most recent `window`
//! values of each side, and once warm-up is over evaluates a two-sample
//! statistic on copies of the two windows at every position.

use crate::missing::{prepare, Prepared};
use crate::{KolmogorovSmirnov, PairSynchronizer, RunnerConfig};
use robust_core::{MetricSeries, Result, SlidingWindow, TwoSampleStatistic};
use tracing::{debug, instrument};

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Positions in the output
    pub positions: usize,
    /// Leading positions emitted absent while the windows fill
    pub warmup: usize,
    /// Positions where the statistic was evaluated
    pub computed: usize,
    /// Positions where either input was absent
    pub missing_pairs: usize,
    /// Positions emitted absent by [`crate::MissingPolicy::MarkAbsent`]
    pub absent_by_policy: usize,
}

/// Windowed two-sample comparator
///
/// Generic over the statistic; defaults to the Kolmogorov–Smirnov distance.
/// A runner holds no per-run state, so one instance can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct WindowedRunner<S = KolmogorovSmirnov> {
    config: RunnerConfig,
    statistic: S,
}

impl WindowedRunner<KolmogorovSmirnov> {
    /// Create a Kolmogorov–Smirnov runner
    pub fn new(config: RunnerConfig) -> Result<Self> {
        Self::with_statistic(config, KolmogorovSmirnov)
    }
}

impl<S: TwoSampleStatistic<f64>> WindowedRunner<S> {
    /// Create a runner around a custom statistic
    pub fn with_statistic(config: RunnerConfig, statistic: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, statistic })
    }

    /// The run configuration
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Compare `first` and `second`, stamping the output with `[from, until)`
    pub fn run(
        &self,
        first: &MetricSeries,
        second: &MetricSeries,
        from: i64,
        until: i64,
    ) -> Result<MetricSeries> {
        self.run_with_stats(first, second, from, until)
            .map(|(series, _)| series)
    }

    /// Like [`run`](Self::run), also returning the run counters
    #[instrument(
        skip_all,
        fields(
            window = self.config.window,
            first = %first.name,
            second = %second.name,
        )
    )]
    pub fn run_with_stats(
        &self,
        first: &MetricSeries,
        second: &MetricSeries,
        from: i64,
        until: i64,
    ) -> Result<(MetricSeries, RunStats)> {
        let window = self.config.window;
        let pairs = PairSynchronizer::new(first, second)?;
        let n = pairs.len();

        let mut w1 = SlidingWindow::new(window)?;
        let mut w2 = SlidingWindow::new(window)?;
        // Reused copy buffers: the statistic sorts its inputs in place.
        let mut d1 = Vec::with_capacity(window);
        let mut d2 = Vec::with_capacity(window);

        let mut values = vec![0.0; n];
        let mut is_absent = vec![false; n];
        let mut stats = RunStats {
            positions: n,
            ..RunStats::default()
        };

        for (i, pair) in pairs.enumerate() {
            if pair.missing {
                stats.missing_pairs += 1;
            }
            w1.push(pair.x);
            w2.push(pair.y);

            if i < window {
                is_absent[i] = true;
                stats.warmup += 1;
                continue;
            }

            w1.snapshot_into(&mut d1);
            w2.snapshot_into(&mut d2);
            match prepare(self.config.missing_policy, &mut d1, &mut d2) {
                Prepared::Compare => {
                    values[i] = self.statistic.statistic(&mut d1, &mut d2);
                    stats.computed += 1;
                }
                Prepared::Absent => {
                    is_absent[i] = true;
                    stats.absent_by_policy += 1;
                }
            }
        }

        debug!(
            statistic = self.statistic.name(),
            policy = self.config.missing_policy.as_str(),
            positions = stats.positions,
            computed = stats.computed,
            missing_pairs = stats.missing_pairs,
            absent_by_policy = stats.absent_by_policy,
            "windowed comparison finished"
        );

        let output = MetricSeries {
            name: format!(
                "{}({},{},{})",
                self.config.function_name, first.name, second.name, window
            ),
            start_time: from,
            stop_time: until,
            step: first.step,
            values,
            is_absent,
        };
        Ok((output, stats))
    }
}

/// Windowed Kolmogorov–Smirnov distance with default settings
pub fn ks_test2(
    first: &MetricSeries,
    second: &MetricSeries,
    window: usize,
    from: i64,
    until: i64,
) -> Result<MetricSeries> {
    WindowedRunner::new(RunnerConfig::new(window)?)?.run(first, second, from, until)
}
