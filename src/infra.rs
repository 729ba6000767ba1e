//! Infrastructure traits for abstracting I/O operations.
//!
//! The command layer reads its input through [`FileSystem`] so it can be
//! driven from memory in tests.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a byte vector.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
