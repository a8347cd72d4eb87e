//! `kolmogorovSmirnovTest2(seriesList, seriesList, windowSize)`

use crate::description::{FunctionDescription, FunctionParam, ParamType};
use crate::{Call, Result};
use robust_core::MetricSeries;
use robust_ks::{RunnerConfig, WindowedRunner, DEFAULT_FUNCTION_NAME};

const DESCRIPTION: &str = "Nonparametric test of the equality of continuous, one-dimensional \
probability distributions that can be used to compare a sample with a reference probability \
distribution (one-sample K–S test), or to compare two samples (two-sample K–S test). \
https://en.wikipedia.org/wiki/Kolmogorov%E2%80%93Smirnov_test";

/// Rolling two-sample Kolmogorov–Smirnov distance between two single series
///
/// The output is always named after the canonical function, whichever alias
/// was called.
pub fn evaluate(call: &Call, from: i64, until: i64) -> Result<Vec<MetricSeries>> {
    call.expect_arity(3)?;
    let first = call.single_series_arg(0)?;
    let second = call.single_series_arg(1)?;
    let window = call.window_arg(2, first.step)?;

    let config = RunnerConfig::new(window)?.with_function_name(DEFAULT_FUNCTION_NAME);
    let output = WindowedRunner::new(config)?.run(first, second, from, until)?;
    Ok(vec![output])
}

/// Description registered under `name`
pub fn describe(name: &'static str) -> FunctionDescription {
    let module = if name == DEFAULT_FUNCTION_NAME {
        "graphite.render.functions"
    } else {
        "graphite.render.functions.custom"
    };
    FunctionDescription {
        name,
        function: format!("{name}(seriesList, seriesList, windowSize)"),
        description: DESCRIPTION,
        module,
        group: "Transform",
        params: vec![
            FunctionParam::required("seriesList", ParamType::SeriesList),
            FunctionParam::required("seriesList", ParamType::SeriesList),
            FunctionParam::required("window", ParamType::IntOrInterval),
        ],
    }
}
