//! Codec registry
//!
//! A codec is a named, deterministic byte transformation. The registry is an
//! ordered list of codecs built once per run and handed to the
//! [`BenchmarkRunner`](crate::bench::BenchmarkRunner). Registry order is the
//! tie-break order of the final ranking, so it is part of the contract.
//!
//! # Examples
//!
//! ```
//! use squeeze_bench::codec::CodecRegistry;
//!
//! let registry = CodecRegistry::standard(6);
//! assert_eq!(registry.names(), vec!["Identity", "Gzip", "Zlib", "Flate", "LZW"]);
//! ```

use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;
use weezl::BitOrder;

use crate::error::SqueezeError;

/// Default DEFLATE compression level (matches zlib's `Z_DEFAULT_COMPRESSION`)
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest accepted DEFLATE compression level
pub const MAX_LEVEL: u32 = 9;

/// Literal code width used by the LZW codec
const LZW_LITERAL_WIDTH: u8 = 8;

/// Errors raised by an individual codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// The streaming encoder failed to write or finish
    #[error("encoder I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The LZW encoder rejected its input
    #[error("LZW encoding failed: {0}")]
    Lzw(#[from] weezl::LzwError),
}

/// A named byte-sequence transformation
///
/// Implementations must be deterministic and free of side effects: the same
/// input always yields the same output, and the input is never modified.
pub trait Codec {
    /// Display name, unique within a registry
    fn name(&self) -> &str;

    /// Compress `input` into a new buffer
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// No-op baseline: output equals input
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Codec for Identity {
    fn name(&self) -> &str {
        "Identity"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(input.to_vec())
    }
}

/// Framing applied around a DEFLATE stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// RFC 1952 gzip member (10-byte header, CRC-32 + size trailer)
    Gzip,
    /// RFC 1950 zlib stream (2-byte header, Adler-32 trailer)
    Zlib,
    /// Bare RFC 1951 DEFLATE
    Raw,
}

/// DEFLATE-family codec backed by `flate2`
#[derive(Debug, Clone, Copy)]
pub struct Deflate {
    envelope: Envelope,
    level: Compression,
}

impl Deflate {
    /// Create a codec for `envelope` at compression `level` (0-9)
    pub fn new(envelope: Envelope, level: u32) -> Self {
        Self {
            envelope,
            level: Compression::new(level.min(MAX_LEVEL)),
        }
    }
}

impl Codec for Deflate {
    fn name(&self) -> &str {
        match self.envelope {
            Envelope::Gzip => "Gzip",
            Envelope::Zlib => "Zlib",
            Envelope::Raw => "Flate",
        }
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let out = match self.envelope {
            Envelope::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), self.level);
                encoder.write_all(input)?;
                encoder.finish()?
            }
            Envelope::Zlib => {
                let mut encoder = ZlibEncoder::new(Vec::new(), self.level);
                encoder.write_all(input)?;
                encoder.finish()?
            }
            Envelope::Raw => {
                let mut encoder = DeflateEncoder::new(Vec::new(), self.level);
                encoder.write_all(input)?;
                encoder.finish()?
            }
        };
        Ok(out)
    }
}

/// LZW codec backed by `weezl`
///
/// Least-significant-bit-first packing with 8-bit literals. The stream opens
/// with a clear code and closes with an end-of-information code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lzw;

impl Codec for Lzw {
    fn name(&self) -> &str {
        "LZW"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = weezl::encode::Encoder::new(BitOrder::Lsb, LZW_LITERAL_WIDTH);
        Ok(encoder.encode(input)?)
    }
}

/// Ordered collection of codecs
#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard line-up: identity baseline, then gzip, zlib, raw DEFLATE
    /// and LZW. DEFLATE-family codecs use `level`.
    pub fn standard(level: u32) -> Self {
        Self::new()
            .with(Identity)
            .with(Deflate::new(Envelope::Gzip, level))
            .with(Deflate::new(Envelope::Zlib, level))
            .with(Deflate::new(Envelope::Raw, level))
            .with(Lzw)
    }

    /// Append a codec, builder style
    pub fn with(mut self, codec: impl Codec + 'static) -> Self {
        self.register(codec);
        self
    }

    /// Append a codec at the end of the registry
    pub fn register(&mut self, codec: impl Codec + 'static) {
        self.codecs.push(Box::new(codec));
    }

    /// Keep only the codecs named in `wanted` (case-insensitive), in registry order
    ///
    /// # Errors
    ///
    /// Returns [`SqueezeError::UnknownCodec`] for the first name that matches
    /// no registered codec.
    pub fn select<S: AsRef<str>>(mut self, wanted: &[S]) -> Result<Self, SqueezeError> {
        for name in wanted {
            let name = name.as_ref();
            if !self.codecs.iter().any(|c| c.name().eq_ignore_ascii_case(name)) {
                return Err(SqueezeError::UnknownCodec {
                    name: name.to_string(),
                    available: self.names().into_iter().map(String::from).collect(),
                });
            }
        }

        self.codecs.retain(|c| {
            wanted
                .iter()
                .any(|w| c.name().eq_ignore_ascii_case(w.as_ref()))
        });
        Ok(self)
    }

    /// Iterate codecs in registry order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Codec> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    /// Codec names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether no codec is registered
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
