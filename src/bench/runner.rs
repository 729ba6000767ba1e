//! Benchmark runner
//!
//! Applies every registered codec to the preprocessed bytes, measures each
//! output against the original size, and ranks the results.

use log::{debug, info};

use super::error::BenchError;
use super::result::BenchmarkResult;
use crate::codec::CodecRegistry;
use crate::fmt::format_bytes;

/// Runs a [`CodecRegistry`] over one input
pub struct BenchmarkRunner<'a> {
    registry: &'a CodecRegistry,
}

impl<'a> BenchmarkRunner<'a> {
    /// Create a runner over `registry`
    pub fn new(registry: &'a CodecRegistry) -> Self {
        Self { registry }
    }

    /// Benchmark every codec on `preprocessed`, measuring against `original`
    ///
    /// Codecs run sequentially in registry order. Results come back sorted by
    /// saving, highest first; codecs with equal savings keep registry order.
    ///
    /// # Examples
    ///
    /// ```
    /// use squeeze_bench::bench::BenchmarkRunner;
    /// use squeeze_bench::codec::CodecRegistry;
    ///
    /// let registry = CodecRegistry::standard(6);
    /// let original = b"{ \"a\" : [1, 1, 1, 1, 1, 1, 1, 1] }";
    /// let minified = br#"{"a":[1,1,1,1,1,1,1,1]}"#;
    ///
    /// let results = BenchmarkRunner::new(&registry).run(original, minified)?;
    /// assert_eq!(results.len(), 5);
    ///
    /// let identity = results.iter().find(|r| r.name == "Identity").unwrap();
    /// assert_eq!(identity.compressed_size, minified.len() as u64);
    /// # Ok::<(), squeeze_bench::bench::BenchError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::CodecFailed`] for the first codec that fails.
    /// Results gathered before the failure are discarded.
    pub fn run(
        &self,
        original: &[u8],
        preprocessed: &[u8],
    ) -> Result<Vec<BenchmarkResult>, BenchError> {
        let original_size = original.len() as u64;
        let mut results = Vec::with_capacity(self.registry.len());

        for codec in self.registry.iter() {
            let output = codec
                .transform(preprocessed)
                .map_err(|source| BenchError::CodecFailed {
                    codec: codec.name().to_string(),
                    source,
                })?;

            let result = BenchmarkResult::new(codec.name(), original_size, output.len() as u64);
            debug!(
                "{}: {} -> {} ({:.2}%)",
                result.name,
                format_bytes(original_size),
                format_bytes(result.compressed_size),
                result.saving_percent
            );
            results.push(result);
        }

        rank(&mut results);

        if let Some(best) = results.first() {
            info!(
                "best codec: {} ({:.2}% saved)",
                best.name, best.saving_percent
            );
        }

        Ok(results)
    }
}

/// Sort by saving, descending
///
/// `sort_by` is stable, which is what keeps ties in registry order.
fn rank(results: &mut [BenchmarkResult]) {
    results.sort_by(|a, b| b.saving_percent.total_cmp(&a.saving_percent));
}
