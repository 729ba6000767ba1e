#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! squeeze-bench library
//!
//! A small harness for ranking general-purpose compression codecs on one
//! input. It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Minify a document and rank the standard codecs on it:
//!
//! ```
//! use squeeze_bench::bench::BenchmarkRunner;
//! use squeeze_bench::codec::CodecRegistry;
//! use squeeze_bench::minify::minify_json;
//!
//! let original = b"{\n  \"items\": [\"x\", \"x\", \"x\", \"x\", \"x\", \"x\"]\n}\n";
//! let minified = minify_json(original).unwrap();
//!
//! let registry = CodecRegistry::standard(6);
//! let results = BenchmarkRunner::new(&registry).run(original, &minified).unwrap();
//!
//! // ranked best first
//! assert!(results
//!     .windows(2)
//!     .all(|w| w[0].saving_percent >= w[1].saving_percent));
//! ```
//!
//! # Advanced Example: Custom Codecs
//!
//! The registry is open to extension; the runner treats every codec alike:
//!
//! ```
//! use squeeze_bench::bench::BenchmarkRunner;
//! use squeeze_bench::codec::{Codec, CodecError, CodecRegistry, Identity};
//!
//! struct DropOdd;
//!
//! impl Codec for DropOdd {
//!     fn name(&self) -> &str {
//!         "DropOdd"
//!     }
//!
//!     fn transform(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
//!         Ok(input.iter().step_by(2).copied().collect())
//!     }
//! }
//!
//! let registry = CodecRegistry::new().with(Identity).with(DropOdd);
//! let results = BenchmarkRunner::new(&registry).run(b"abcd", b"abcd").unwrap();
//!
//! assert_eq!(results[0].name, "DropOdd");
//! assert_eq!(results[0].saving_percent, 50.0);
//! ```

/// Benchmark harness: runner and results
pub mod bench;
/// Command handlers for CLI operations
pub mod cmd;
/// Codec trait, implementations and registry
pub mod codec;
/// Run configuration
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// JSON minification
pub mod minify;
/// Table and JSON report rendering
pub mod report;
