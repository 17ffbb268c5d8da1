// crates/usecase/src/dto.rs
use line_histogram_domain::RegionSummary;
use line_histogram_shared_kernel::Span;
use serde::Serialize;

/// Result for one region, reported against the span it had before editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionOutcome {
    pub span: Span,
    #[serde(flatten)]
    pub summary: RegionSummary,
    pub replacement_len: usize,
    pub changed: bool,
}

/// Everything one histogram command did to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramOutcome {
    /// Set when no selection was active and the whole document was used.
    pub whole_document: bool,
    pub regions: Vec<RegionOutcome>,
}

impl HistogramOutcome {
    pub fn changed(&self) -> bool {
        self.regions.iter().any(|region| region.changed)
    }
}
