// crates/infra/src/document.rs
use line_histogram_ports::{Edit, TextDocument};
use line_histogram_shared_kernel::{DomainError, Result, Span};

/// A document held entirely in memory.
///
/// Backs the command-line host and embedding callers. After [`apply`] the
/// selections cover the replacement texts, the way an editor keeps a
/// selection around text it just replaced.
///
/// [`apply`]: TextDocument::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    text: String,
    selections: Vec<Span>,
}

impl MemoryDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), selections: Vec::new() }
    }

    pub fn with_selections(mut self, selections: Vec<Span>) -> Self {
        self.selections = selections;
        self
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl TextDocument for MemoryDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn selections(&self) -> &[Span] {
        &self.selections
    }

    fn apply(&mut self, edits: Vec<Edit>) -> Result<()> {
        for edit in &edits {
            edit.span.check_against(&self.text)?;
        }

        let mut order: Vec<usize> = (0..edits.len()).collect();
        order.sort_by_key(|&i| (edits[i].span.start(), edits[i].span.end()));
        let filled: Vec<Span> = order
            .iter()
            .map(|&i| edits[i].span)
            .filter(|span| !span.is_empty())
            .collect();
        for pair in filled.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if first.overlaps(second) {
                return Err(DomainError::OverlappingRegions { first, second }.into());
            }
        }
        // An insertion may touch a replaced span's edges but not fall inside it.
        for insertion in edits.iter().map(|edit| edit.span).filter(|span| span.is_empty()) {
            let at = insertion.start();
            if let Some(&first) = filled.iter().find(|span| span.start() < at && at < span.end()) {
                return Err(DomainError::OverlappingRegions { first, second: insertion }.into());
            }
        }

        // New selections, computed front to back against the shifted text.
        let mut selections = vec![Span::cursor(0); edits.len()];
        let mut shift: isize = 0;
        for &i in &order {
            let span = edits[i].span;
            let start = span.start().saturating_add_signed(shift);
            selections[i] = Span::new(start, start + edits[i].text.len())?;
            shift += edits[i].text.len() as isize - span.len() as isize;
        }

        // Replace back to front so untouched spans keep their offsets.
        for &i in order.iter().rev() {
            self.text.replace_range(edits[i].span.range(), &edits[i].text);
        }
        log::trace!("applied {} edits, document now {} bytes", edits.len(), self.text.len());

        self.selections = selections;
        Ok(())
    }
}
