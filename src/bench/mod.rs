//! Compression benchmarking harness
//!
//! 1. every codec in the registry compresses the preprocessed bytes
//! 2. each output is measured against the original (pre-minification) size
//! 3. results are ranked by saving, ties kept in registry order

pub mod error;
pub mod result;
pub mod runner;

pub use error::BenchError;
pub use result::{saving_percent, BenchmarkResult};
pub use runner::BenchmarkRunner;
