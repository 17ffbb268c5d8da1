// crates/usecase/src/orchestrator.rs
use line_histogram_domain::transform;
use line_histogram_ports::{Edit, TextDocument};
use line_histogram_shared_kernel::{DomainError, DomainResult, ErrorContext, Result, Span};

use crate::dto::{HistogramOutcome, RegionOutcome};

/// Replace every selected region of a document with its line histogram.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateHistogram;

impl CreateHistogram {
    pub fn new() -> Self {
        Self
    }

    /// Transform all regions of `document`.
    ///
    /// All region texts are read and transformed before any edit is handed
    /// to the document, so no replacement can shift a later region.
    ///
    /// # Errors
    ///
    /// Fails when a selection does not fit the document, when selections
    /// overlap, or when the document rejects the edits. The document is left
    /// untouched in the first two cases.
    pub fn run(&self, document: &mut dyn TextDocument) -> Result<HistogramOutcome> {
        let selections = document.selections();
        let whole_document = uses_whole_document(selections);
        let regions = resolve_regions(document.text(), selections).context("resolving regions")?;

        let text = document.text();
        let mut edits = Vec::with_capacity(regions.len());
        let mut outcomes = Vec::with_capacity(regions.len());
        for (index, span) in regions.into_iter().enumerate() {
            let original = &text[span.range()];
            let transformed = transform(original);
            let changed = transformed.text != original;

            log::debug!(
                "region #{index} {span}: {} distinct / {} lines ({}){}",
                transformed.summary.distinct_lines,
                transformed.summary.counted_lines,
                transformed.summary.line_ending,
                if changed { "" } else { ", unchanged" }
            );

            outcomes.push(RegionOutcome {
                span,
                summary: transformed.summary,
                replacement_len: transformed.text.len(),
                changed,
            });
            edits.push(Edit::new(span, transformed.text));
        }

        document.apply(edits).context("applying histogram edits")?;
        Ok(HistogramOutcome { whole_document, regions: outcomes })
    }
}

/// No selection at all, or a single empty one, means "the whole document".
fn uses_whole_document(selections: &[Span]) -> bool {
    match selections {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    }
}

/// Turn host selections into the regions to transform.
///
/// Falls back to one region covering `text` when [`uses_whole_document`]
/// applies. Otherwise every selection is kept in host order, after checking
/// it fits `text` and overlaps no other selection.
///
/// # Errors
///
/// Returns the first out-of-bounds, split-character or overlapping span.
pub fn resolve_regions(text: &str, selections: &[Span]) -> DomainResult<Vec<Span>> {
    if uses_whole_document(selections) {
        return Ok(vec![Span::whole(text)]);
    }

    for span in selections {
        span.check_against(text)?;
    }
    for (i, first) in selections.iter().enumerate() {
        if let Some(second) = selections[i + 1..].iter().find(|other| first.overlaps(**other)) {
            return Err(DomainError::OverlappingRegions { first: *first, second: *second });
        }
    }

    Ok(selections.to_vec())
}
