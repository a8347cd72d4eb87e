//! Self-describing metadata for query functions

use serde::Serialize;

/// Type of a function parameter as shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamType {
    SeriesList,
    IntOrInterval,
}

/// One parameter of a query function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
}

impl FunctionParam {
    pub const fn required(name: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            param_type,
            required: true,
        }
    }
}

/// Human-readable description of a query function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescription {
    pub name: &'static str,
    /// Call signature, e.g. `ksTest2(seriesList, seriesList, windowSize)`
    pub function: String,
    pub description: &'static str,
    pub module: &'static str,
    pub group: &'static str,
    pub params: Vec<FunctionParam>,
}
