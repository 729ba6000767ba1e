//! Error types for the benchmark runner

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchError {
    /// A codec failed; no partial results are kept
    #[error("codec {codec} failed")]
    CodecFailed {
        /// Name of the failing codec
        codec: String,
        #[source]
        /// Underlying codec error
        source: CodecError,
    },
}

impl BenchError {
    /// Name of the codec that failed
    pub fn codec(&self) -> &str {
        match self {
            Self::CodecFailed { codec, .. } => codec,
        }
    }
}
