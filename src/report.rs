//! Benchmark report formatting
//!
//! Two renderings of the same ranked result set: a right-aligned plain text
//! table for terminals, and a JSON document for scripts. Neither adds color,
//! so the table lines up when piped.

use serde::Serialize;
use std::fmt::{self, Write as _};

use crate::bench::BenchmarkResult;

/// Column headers, left to right
pub const HEADERS: [&str; 4] = [
    "Algorithm",
    "Original Size (bytes)",
    "Compressed Size (bytes)",
    "Saving (%)",
];

/// Spaces added to every column's widest cell
const PADDING: usize = 3;

/// JSON report layout
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Size of the input as read (bytes)
    pub original_size: u64,
    /// Size of the bytes handed to the codecs (bytes)
    pub preprocessed_size: u64,
    /// Ranked results
    pub results: &'a [BenchmarkResult],
}

/// Format the ranked results as a text table
///
/// # Examples
///
/// ```
/// use squeeze_bench::bench::BenchmarkResult;
/// use squeeze_bench::report::format_table;
///
/// let results = vec![BenchmarkResult::new("Gzip", 100, 40)];
/// let table = format_table(100, &results).unwrap();
/// assert!(table.starts_with("Original Size: 100 bytes\n"));
/// assert!(table.contains("60.00%"));
/// ```
pub fn format_table(original_size: u64, results: &[BenchmarkResult]) -> Result<String, fmt::Error> {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(results.len() + 2);
    rows.push(HEADERS.map(String::from));
    rows.push(HEADERS.map(|h| "-".repeat(h.len())));
    for result in results {
        rows.push([
            result.name.clone(),
            result.original_size.to_string(),
            result.compressed_size.to_string(),
            format!("{:.2}%", result.saving_percent),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    writeln!(output, "Original Size: {} bytes", original_size)?;
    for row in &rows {
        for (width, cell) in widths.iter().zip(row) {
            write!(output, "{:>w$}", cell, w = width + PADDING)?;
        }
        output.push('\n');
    }

    Ok(output)
}

/// Format the ranked results as pretty-printed JSON
pub fn format_json(
    original_size: u64,
    preprocessed_size: u64,
    results: &[BenchmarkResult],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        original_size,
        preprocessed_size,
        results,
    })
}
