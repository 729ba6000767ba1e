//! Bench command implementation
//!
//! Read the input, minify it as JSON, run every codec, print the ranking.
//! The report is rendered in full before anything is written, so a failing
//! stage never leaves a partial table on stdout.

use anyhow::Result;
use log::{debug, info};
use std::borrow::Cow;
use std::io::{self, Write};

use crate::bench::BenchmarkRunner;
use crate::config::{BenchOptions, OutputFormat};
use crate::error::SqueezeError;
use crate::fmt::format_bytes;
use crate::infra::{FileSystem, RealFileSystem};
use crate::minify::minify_json;
use crate::report::{format_json, format_table};

/// Benchmark the configured input and print the ranking to stdout
///
/// # Examples
///
/// ```no_run
/// use squeeze_bench::cmd::cmd_bench;
/// use squeeze_bench::config::BenchOptions;
///
/// cmd_bench(&BenchOptions::for_input("package-lock.json"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns a [`SqueezeError`] if:
/// - no input file was given or a requested codec does not exist
/// - the file can't be read
/// - the file isn't valid JSON (unless minification is disabled)
/// - any codec fails
pub fn cmd_bench(options: &BenchOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_bench(options, &RealFileSystem, &mut out)
}

/// Run the bench command against an arbitrary filesystem and writer
pub fn run_bench<FS: FileSystem, W: Write>(
    options: &BenchOptions,
    fs: &FS,
    out: &mut W,
) -> Result<()> {
    let path = options.input_path()?;
    let registry = options.registry()?;

    let original = fs.read(path).map_err(|source| SqueezeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "read {} from {}",
        format_bytes(original.len() as u64),
        path.display()
    );

    let preprocessed: Cow<'_, [u8]> = if !options.minify {
        debug!("minification disabled, benchmarking raw bytes");
        Cow::Borrowed(original.as_slice())
    } else if original.is_empty() {
        debug!("empty input, nothing to minify");
        Cow::Borrowed(original.as_slice())
    } else {
        let minified = minify_json(&original).map_err(|source| SqueezeError::Preprocess {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "minified {} -> {}",
            format_bytes(original.len() as u64),
            format_bytes(minified.len() as u64)
        );
        Cow::Owned(minified)
    };

    let results = BenchmarkRunner::new(&registry)
        .run(&original, &preprocessed)
        .map_err(SqueezeError::from)?;

    let original_size = original.len() as u64;
    let rendered = match options.format {
        OutputFormat::Table => format_table(original_size, &results)?,
        OutputFormat::Json => {
            let mut json = format_json(original_size, preprocessed.len() as u64, &results)?;
            json.push('\n');
            json
        }
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
