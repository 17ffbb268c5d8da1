// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::Span;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum HistogramError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<HistogramError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, HistogramError>;

/// Errors raised while mapping regions onto a document.
///
/// The histogram transform itself is total; these only arise at the host boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Region {span} ends past the document length {len}")]
    SpanOutOfBounds { span: Span, len: usize },

    #[error("Region {span} does not fall on a character boundary")]
    SpanNotOnCharBoundary { span: Span },

    #[error("Region start {start} is after its end {end}")]
    InvertedSpan { start: usize, end: usize },

    #[error("Regions {first} and {second} overlap")]
    OverlappingRegions { first: Span, second: Span },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{origin}' is not valid UTF-8 text: {source}")]
    InvalidUtf8 {
        origin: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to read {origin}: {source}")]
    StreamRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write standard output: {0}")]
    StdoutWrite(#[source] std::io::Error),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresentationError {
    #[error("Invalid region '{value}': {reason}")]
    InvalidSpan { value: String, reason: String },

    #[error("--in-place needs a file argument, not standard input")]
    InPlaceRequiresFile,
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<HistogramError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| HistogramError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| HistogramError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
