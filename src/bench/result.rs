//! Per-codec benchmark result

use serde::Serialize;

/// Size measurement for one codec
///
/// Every saving is measured against the original, pre-minification size, so
/// it reflects the whole pipeline (minify + codec), not the codec alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// Codec name
    pub name: String,
    /// Size of the input as read (bytes)
    pub original_size: u64,
    /// Size of the codec output (bytes)
    pub compressed_size: u64,
    /// `(original - compressed) / original * 100`, or 0 for an empty original
    pub saving_percent: f64,
}

impl BenchmarkResult {
    /// Build a result, deriving the saving from the two sizes
    pub fn new(name: impl Into<String>, original_size: u64, compressed_size: u64) -> Self {
        Self {
            name: name.into(),
            original_size,
            compressed_size,
            saving_percent: saving_percent(original_size, compressed_size),
        }
    }
}

/// Calculate size reduction as percentage
///
/// An empty original has nothing to save, so the saving is `0.0` rather
/// than a division by zero.
///
/// # Examples
///
/// ```
/// use squeeze_bench::bench::saving_percent;
///
/// assert_eq!(saving_percent(200, 50), 75.0);
/// assert_eq!(saving_percent(100, 150), -50.0);
/// assert_eq!(saving_percent(0, 20), 0.0);
/// ```
pub fn saving_percent(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    let original = original_size as f64;
    ((original - compressed_size as f64) / original) * 100.0
}
