// crates/infra/src/persistence/stdio.rs
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use line_histogram_shared_kernel::{InfraResult, InfrastructureError};

use super::{FileReader, FileWriter, file_reader::decode};

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    pub fn read(&self) -> InfraResult<String> {
        match self {
            Self::Stdin => Self::read_from(io::stdin().lock(), "<stdin>"),
            Self::File(path) => FileReader::read_text(path),
        }
    }

    /// Read all of `reader` as UTF-8 text.
    pub fn read_from(mut reader: impl Read, origin: &str) -> InfraResult<String> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::StreamRead { origin: origin.to_owned(), source })?;
        decode(buf, origin)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path.as_path()),
        }
    }
}

/// Where the transformed document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSink {
    Stdout,
    /// Plain overwrite of a separate output file.
    File(PathBuf),
    /// Atomic replacement of the source file.
    InPlace(PathBuf),
}

impl DocumentSink {
    pub fn write(&self, text: &str) -> InfraResult<()> {
        match self {
            Self::Stdout => Self::write_to(io::stdout().lock(), text),
            Self::File(path) => FileWriter::write(path, text.as_bytes()),
            Self::InPlace(path) => FileWriter::atomic_write(path, text.as_bytes()),
        }
    }

    pub fn write_to(mut writer: impl Write, text: &str) -> InfraResult<()> {
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(InfrastructureError::StdoutWrite)
    }
}
