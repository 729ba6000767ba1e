//! Test fixture helpers for creating input files

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The whitespace-heavy document from the end-to-end scenario
pub const SPACED_JSON: &str = r#"{"a": 1,  "b": [1,2,3]}"#;

/// Same document with insignificant whitespace removed
pub const SPACED_JSON_MINIFIED: &str = r#"{"a":1,"b":[1,2,3]}"#;

/// Codec names in registry order
pub const CODEC_NAMES: [&str; 5] = ["Identity", "Gzip", "Zlib", "Flate", "LZW"];

/// Write `contents` to `name` inside a fresh temp directory
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the file) - the TempDir must be kept alive
pub fn write_input(name: &str, contents: &[u8]) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(name);
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}

/// A pretty-printed JSON array of `count` similar records
pub fn records_json(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| {
            format!(
                "  {{\n    \"id\": {},\n    \"name\": \"user-{}\",\n    \"active\": {}\n  }}",
                i,
                i % 17,
                i % 2 == 0
            )
        })
        .collect();
    format!("[\n{}\n]\n", records.join(",\n"))
}

/// Deterministic pseudo-random bytes (xorshift), poorly compressible
pub fn noise(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
