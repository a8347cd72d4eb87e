//! Query function implementations

pub mod ks_test2;
