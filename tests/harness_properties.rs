//! Property tests for the benchmark harness
//!
//! Saving formula, ranking order and tie stability, checked against stub
//! codecs whose output sizes are chosen by proptest.

use proptest::prelude::*;
use squeeze_bench::bench::{BenchmarkResult, BenchmarkRunner};
use squeeze_bench::codec::{Codec, CodecError, CodecRegistry, DEFAULT_LEVEL};
use squeeze_bench::minify::minify_json;

/// Emits a fixed number of bytes regardless of input
struct FixedSize {
    name: String,
    size: usize,
}

impl Codec for FixedSize {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, _input: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(vec![b'z'; self.size])
    }
}

fn registry_of(sizes: &[usize]) -> CodecRegistry {
    sizes
        .iter()
        .enumerate()
        .fold(CodecRegistry::new(), |registry, (i, &size)| {
            registry.with(FixedSize {
                name: format!("codec-{i}"),
                size,
            })
        })
}

fn index_of(result: &BenchmarkResult) -> usize {
    result.name.trim_start_matches("codec-").parse().unwrap()
}

#[test]
fn test_equal_sizes_keep_registry_order() {
    let registry = registry_of(&[30, 30, 30, 30]);
    let results = BenchmarkRunner::new(&registry).run(&[0; 60], &[0; 60]).unwrap();

    let order: Vec<usize> = results.iter().map(index_of).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_identity_saving_is_minification_delta() {
    let original = b"{\n    \"key\": \"value\",\n    \"list\": [ 1, 2, 3 ]\n}\n";
    let minified = minify_json(original).unwrap();

    let registry = CodecRegistry::standard(DEFAULT_LEVEL);
    let results = BenchmarkRunner::new(&registry)
        .run(original, &minified)
        .unwrap();
    let identity = results.iter().find(|r| r.name == "Identity").unwrap();

    assert_eq!(identity.compressed_size, minified.len() as u64);
    let expected = (original.len() - minified.len()) as f64 / original.len() as f64 * 100.0;
    assert!((identity.saving_percent - expected).abs() < 1e-9);
}

proptest! {
    /// Property: every saving matches the formula against the original size
    #[test]
    fn prop_saving_matches_formula(
        original_len in 1usize..4096,
        sizes in prop::collection::vec(0usize..8192, 1..8)
    ) {
        let registry = registry_of(&sizes);
        let original = vec![b'a'; original_len];
        let results = BenchmarkRunner::new(&registry).run(&original, b"x").unwrap();

        prop_assert_eq!(results.len(), sizes.len());
        for result in &results {
            let expected = (original_len as f64 - result.compressed_size as f64)
                / original_len as f64
                * 100.0;
            prop_assert!((result.saving_percent - expected).abs() < 1e-9);
            prop_assert_eq!(result.original_size, original_len as u64);
            prop_assert_eq!(result.compressed_size, sizes[index_of(result)] as u64);
        }
    }

    /// Property: ranking is non-increasing, and ties keep registry order
    #[test]
    fn prop_ranking_is_stable_and_descending(
        sizes in prop::collection::vec(0usize..16, 1..12)
    ) {
        let registry = registry_of(&sizes);
        let results = BenchmarkRunner::new(&registry).run(&[0; 16], &[0; 16]).unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].saving_percent >= pair[1].saving_percent);
            if pair[0].saving_percent == pair[1].saving_percent {
                prop_assert!(index_of(&pair[0]) < index_of(&pair[1]));
            }
        }
    }

    /// Property: standard codecs never fail, whatever the bytes
    #[test]
    fn prop_standard_codecs_accept_arbitrary_bytes(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        level in 0u32..=9
    ) {
        let registry = CodecRegistry::standard(level);
        let results = BenchmarkRunner::new(&registry).run(&data, &data).unwrap();
        prop_assert_eq!(results.len(), 5);
    }
}
