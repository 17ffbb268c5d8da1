// crates/domain/src/report.rs
use std::cmp::Ordering;

use line_histogram_shared_kernel::{LineEnding, Occurrences};
use serde::Serialize;

use crate::histogram::Histogram;

/// One `(line, count)` row of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportEntry<'a> {
    pub line: &'a str,
    pub count: Occurrences,
}

impl ReportEntry<'_> {
    /// Higher counts sort first; equal counts compare as equal.
    #[inline]
    pub fn by_count_descending(a: &Self, b: &Self) -> Ordering {
        b.count.cmp(&a.count)
    }
}

/// Histogram entries ordered by descending count, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    entries: Vec<ReportEntry<'a>>,
    line_ending: LineEnding,
    ends_with_line_ending: bool,
}

impl<'a> Report<'a> {
    pub fn from_histogram(histogram: &Histogram<'a>) -> Self {
        let mut entries: Vec<ReportEntry<'a>> = histogram
            .iter()
            .map(|(line, count)| ReportEntry { line, count })
            .collect();
        // Ties keep first-seen order here, but callers must not rely on it.
        entries.sort_by(ReportEntry::by_count_descending);

        Self {
            entries,
            line_ending: histogram.line_ending(),
            ends_with_line_ending: histogram.ends_with_line_ending(),
        }
    }

    pub fn entries(&self) -> &[ReportEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub const fn ends_with_line_ending(&self) -> bool {
        self.ends_with_line_ending
    }

    /// Width of the widest count column.
    ///
    /// Entries are sorted, so the first count is the largest.
    pub fn display_width(&self) -> usize {
        self.entries.first().map_or(0, |entry| entry.count.digits())
    }
}
