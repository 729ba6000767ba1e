//! Run configuration
//!
//! Options for one benchmark run, assembled from CLI flags. There is no
//! config file; defaults describe a plain `squeeze-bench <FILE>` invocation.

use std::path::{Path, PathBuf};

use crate::codec::{CodecRegistry, DEFAULT_LEVEL};
use crate::error::SqueezeError;

/// How the ranked results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Right-aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Options for a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchOptions {
    /// File to benchmark
    pub input: Option<PathBuf>,
    /// Minify the input as JSON before compressing
    pub minify: bool,
    /// DEFLATE compression level (0-9)
    pub level: u32,
    /// Restrict the run to these codecs; empty means all
    pub codecs: Vec<String>,
    /// Output rendering
    pub format: OutputFormat,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            input: None,
            minify: true,
            level: DEFAULT_LEVEL,
            codecs: Vec::new(),
            format: OutputFormat::Table,
        }
    }
}

impl BenchOptions {
    /// Options for benchmarking `input` with everything else defaulted
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// The input path
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::InputRequired`] when no file was given.
    pub fn input_path(&self) -> Result<&Path, SqueezeError> {
        self.input.as_deref().ok_or(SqueezeError::InputRequired)
    }

    /// Build the codec registry these options describe
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::UnknownCodec`] if a requested codec does not exist.
    pub fn registry(&self) -> Result<CodecRegistry, SqueezeError> {
        let registry = CodecRegistry::standard(self.level);
        if self.codecs.is_empty() {
            Ok(registry)
        } else {
            registry.select(self.codecs.as_slice())
        }
    }
}
