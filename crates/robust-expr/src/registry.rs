//! Function table mapping query function names to their implementation
//!
//! Each entry pairs a plain `fn` entry point with a description builder; the
//! table is a static slice looked up by name.

use crate::description::FunctionDescription;
use crate::functions::ks_test2;
use crate::{Call, Error, Result};
use robust_core::MetricSeries;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Signature of a function entry point: `(call, from, until)`
pub type EvaluateFn = fn(&Call, i64, i64) -> Result<Vec<MetricSeries>>;

/// One row of the function table
#[derive(Debug, Clone, Copy)]
pub struct FunctionEntry {
    pub name: &'static str,
    pub evaluate: EvaluateFn,
    pub describe: fn(&'static str) -> FunctionDescription,
}

impl FunctionEntry {
    /// Description of this entry
    pub fn description(&self) -> FunctionDescription {
        (self.describe)(self.name)
    }
}

/// Every function this crate provides
pub static FUNCTIONS: &[FunctionEntry] = &[
    FunctionEntry {
        name: "kolmogorovSmirnovTest2",
        evaluate: ks_test2::evaluate,
        describe: ks_test2::describe,
    },
    FunctionEntry {
        name: "ksTest2",
        evaluate: ks_test2::evaluate,
        describe: ks_test2::describe,
    },
];

/// Find the entry registered under `name`
pub fn lookup(name: &str) -> Option<&'static FunctionEntry> {
    FUNCTIONS.iter().find(|entry| entry.name == name)
}

/// Dispatch `call` to its function
pub fn evaluate(call: &Call, from: i64, until: i64) -> Result<Vec<MetricSeries>> {
    let entry = lookup(&call.name).ok_or_else(|| Error::UnknownFunction(call.name.clone()))?;
    debug!(function = entry.name, args = call.args.len(), from, until, "evaluating");

    (entry.evaluate)(call, from, until).map_err(|err| {
        warn!(function = entry.name, error = %err, "rejected call");
        err
    })
}

/// Descriptions of all functions, keyed by name
pub fn descriptions() -> BTreeMap<&'static str, FunctionDescription> {
    FUNCTIONS
        .iter()
        .map(|entry| (entry.name, entry.description()))
        .collect()
}

/// Descriptions of all functions as a JSON object
pub fn descriptions_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&descriptions())?)
}
