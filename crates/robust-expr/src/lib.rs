//! Query-function layer for windowed series comparisons
//!
//! This crate exposes the comparison algorithms as named query functions:
//! a call with evaluated arguments is validated, dispatched through a static
//! function table and turned into output series. Each function also carries
//! a serializable description for function listings.
//!
//! # Example
//!
//! ```rust
//! use robust_core::MetricSeries;
//! use robust_expr::{evaluate, Arg, Call};
//!
//! let a = MetricSeries::from_values("a1", 0, 60, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let b = a.clone();
//! let call = Call::new(
//!     "ksTest2",
//!     vec![Arg::Series(vec![a]), Arg::Series(vec![b]), Arg::Integer(3)],
//! );
//!
//! let out = evaluate(&call, 0, 360).unwrap();
//! assert_eq!(out[0].name, "kolmogorovSmirnovTest2(a1,a1,3)");
//! ```

mod args;
mod description;
mod error;
pub mod functions;
mod interval;
mod registry;

pub use args::{Arg, Call};
pub use description::{FunctionDescription, FunctionParam, ParamType};
pub use error::{Error, Result};
pub use interval::parse_interval;
pub use registry::{
    descriptions, descriptions_json, evaluate, lookup, EvaluateFn, FunctionEntry, FUNCTIONS,
};
