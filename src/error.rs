//! Error types with contextual suggestions
//!
//! Every failure is fatal: the command stops at the first error and nothing
//! is written to stdout. Each variant maps to a sysexits.h-style exit code and
//! an actionable hint.
//!
//! # Examples
//!
//! ```
//! use squeeze_bench::error::SqueezeError;
//!
//! let err = SqueezeError::InputRequired;
//! assert_eq!(err.exit_code(), 64);
//! assert!(err.suggestion().unwrap().contains("squeeze-bench"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::bench::BenchError;
use crate::minify::MinifyError;

/// Errors surfaced by the squeeze-bench command
#[derive(Error, Debug)]
pub enum SqueezeError {
    /// No input file was given
    #[error("no input file given")]
    InputRequired,

    /// A requested codec is not registered
    #[error("unknown codec: '{name}'")]
    UnknownCodec {
        /// Requested name
        name: String,
        /// Names that are registered
        available: Vec<String>,
    },

    /// Opening or reading the input failed
    #[error("failed to read {}", path.display())]
    Io {
        /// Input path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// The input could not be minified as JSON
    #[error("failed to minify {} as JSON", path.display())]
    Preprocess {
        /// Input path
        path: PathBuf,
        #[source]
        /// Parser error source
        source: MinifyError,
    },

    /// A codec failed during the benchmark
    #[error("benchmark aborted: {0}")]
    Bench(#[from] BenchError),
}

impl SqueezeError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InputRequired => Some("Usage: squeeze-bench <FILE>".to_string()),
            Self::UnknownCodec { available, .. } => {
                Some(format!("Available codecs: {}", available.join(", ")))
            }
            Self::Io { path, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    Some(format!("Check that {} exists", path.display()))
                } else {
                    Some(format!(
                        "Check file permissions and that {} is a readable file",
                        path.display()
                    ))
                }
            }
            Self::Preprocess { path, source } => {
                let (line, column) = source.position();
                Some(format!(
                    "Fix the JSON syntax at {}:{}:{}, or pass --raw to benchmark the file without minifying",
                    path.display(),
                    line,
                    column
                ))
            }
            Self::Bench(BenchError::CodecFailed { codec, .. }) => Some(format!(
                "Exclude the failing codec with --codec, e.g. run without '{}'",
                codec
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputRequired => 64,         // EX_USAGE
            Self::UnknownCodec { .. } => 64,   // EX_USAGE
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 66, // EX_NOINPUT
                _ => 74,                             // EX_IOERR
            },
            Self::Preprocess { .. } => 65, // EX_DATAERR
            Self::Bench(_) => 70,          // EX_SOFTWARE
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<SqueezeError>()
            .and_then(SqueezeError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(err) = error.downcast_ref::<SqueezeError>() {
            err.exit_code()
        } else {
            1
        }
    }
}
