//! Reading and decoding the input document collection.
use log::debug;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::error::{IndexError, Result};

/// Decode the JSON file at `path`.
///
/// The file is read to its end rather than sized up front, so pipes, FIFOs,
/// and process substitutions load the same way regular files do.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if the file cannot be read, and
/// [`IndexError::Parse`] if its content is not valid JSON.
pub fn load_path(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path).map_err(|source| IndexError::Io {
        path: Some(path.to_path_buf()),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    from_slice(&bytes)
}

/// Decode JSON from an arbitrary reader, such as standard input.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if reading fails, and [`IndexError::Parse`] if
/// the content is not valid JSON.
pub fn load_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| IndexError::Io { path: None, source })?;
    debug!("read {} bytes from stream", buffer.len());
    from_slice(&buffer)
}

/// Decode JSON from a byte slice.
///
/// # Errors
///
/// Returns [`IndexError::Parse`] if `bytes` is not valid JSON.
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}
