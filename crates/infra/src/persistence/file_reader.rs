// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::Read,
    path::Path,
};

use line_histogram_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading documents with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the file as UTF-8 text, keeping its line endings untouched.
    pub fn read_text(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        decode(bytes, &path.display().to_string())
    }
}

/// Decode `bytes` as UTF-8; `origin` names the input in error messages.
pub(crate) fn decode(bytes: Vec<u8>, origin: &str) -> InfraResult<String> {
    String::from_utf8(bytes).map_err(|source| InfrastructureError::InvalidUtf8 {
        origin: origin.to_owned(),
        source,
    })
}
