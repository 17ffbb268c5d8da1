// src/config.rs
use line_histogram_infra::{DocumentSink, DocumentSource};
use log::LevelFilter;

use crate::cli::parsers::SpanArg;

/// Fully validated settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: DocumentSource,
    pub sink: DocumentSink,
    /// Selections standing in for the editor's; empty means the whole document.
    pub regions: Vec<SpanArg>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn in_place(&self) -> bool {
        matches!(self.sink, DocumentSink::InPlace(_))
    }
}
