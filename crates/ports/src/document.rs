// crates/ports/src/document.rs
use line_histogram_shared_kernel::{Result, Span};
use serde::{Deserialize, Serialize};

/// Replace the bytes covered by `span` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

impl Edit {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self { span, text: text.into() }
    }
}

/// Port for a host-owned text buffer with zero or more selections.
pub trait TextDocument {
    /// Full current content of the document.
    fn text(&self) -> &str;

    /// Current selections, in host order. May be empty.
    fn selections(&self) -> &[Span];

    /// Apply every edit as one transaction.
    ///
    /// Spans refer to the text as it was before any of these edits. Callers
    /// guarantee the spans are valid and do not overlap.
    fn apply(&mut self, edits: Vec<Edit>) -> Result<()>;
}
