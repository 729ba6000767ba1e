//! JSON minification
//!
//! The input is first validated as a single JSON value with `serde_json`,
//! then insignificant whitespace is dropped lexically. Working on the raw
//! bytes rather than re-serializing a parsed value keeps key order, duplicate
//! keys, number spelling and string escapes exactly as written.

use serde::de::IgnoredAny;
use thiserror::Error;

/// Errors raised while minifying
#[derive(Error, Debug)]
pub enum MinifyError {
    /// Input is not exactly one well-formed JSON value
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

impl MinifyError {
    /// 1-based line and column where parsing stopped
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::Syntax(e) => (e.line(), e.column()),
        }
    }
}

/// Remove whitespace outside string literals from a JSON document
///
/// # Examples
///
/// ```
/// use squeeze_bench::minify::minify_json;
///
/// let out = minify_json(b"{\"a\": 1,  \"b\": [1, 2, 3]}\n").unwrap();
/// assert_eq!(out, br#"{"a":1,"b":[1,2,3]}"#);
/// ```
///
/// # Errors
///
/// Returns [`MinifyError::Syntax`] if the input is empty, malformed, or has
/// trailing content after the first value.
pub fn minify_json(input: &[u8]) -> Result<Vec<u8>, MinifyError> {
    serde_json::from_slice::<IgnoredAny>(input)?;

    let mut out = Vec::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for &byte in input {
        if in_string {
            out.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {}
            b'"' => {
                in_string = true;
                out.push(byte);
            }
            _ => out.push(byte),
        }
    }

    Ok(out)
}
