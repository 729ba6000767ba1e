//! Command handlers for squeeze-bench CLI

pub mod bench;

pub use bench::{cmd_bench, run_bench};
