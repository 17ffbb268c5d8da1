// crates/domain/src/histogram.rs
use indexmap::IndexMap;
use line_histogram_shared_kernel::{LineEnding, Occurrences};

use crate::line_ending;

/// Occurrence counts of the distinct non-empty lines of one region.
///
/// Keys borrow from the region text. Iteration follows first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<'a> {
    counts: IndexMap<&'a str, Occurrences>,
    line_ending: LineEnding,
    ends_with_line_ending: bool,
}

impl<'a> Histogram<'a> {
    /// Detect the region's line ending, split on it and count every non-empty line.
    pub fn build(text: &'a str) -> Self {
        let line_ending = line_ending::detect(text);
        Self::build_with(text, line_ending)
    }

    /// Count lines using an already chosen line ending.
    ///
    /// The delimiter is matched literally; zero-length segments are skipped.
    pub fn build_with(text: &'a str, line_ending: LineEnding) -> Self {
        let mut counts: IndexMap<&'a str, Occurrences> = IndexMap::new();
        for line in text.split(line_ending.as_str()).filter(|line| !line.is_empty()) {
            counts
                .entry(line)
                .and_modify(Occurrences::increment)
                .or_insert_with(Occurrences::one);
        }

        Self {
            counts,
            line_ending,
            ends_with_line_ending: text.ends_with(line_ending.as_str()),
        }
    }

    pub fn count(&self, line: &str) -> Option<Occurrences> {
        self.counts.get(line).copied()
    }

    /// Distinct lines with their counts, in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a str, Occurrences)> + '_ {
        self.counts.iter().map(|(line, count)| (*line, *count))
    }

    /// Number of distinct non-empty lines.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of non-empty lines counted, duplicates included.
    pub fn total(&self) -> Occurrences {
        self.counts.values().copied().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub const fn ends_with_line_ending(&self) -> bool {
        self.ends_with_line_ending
    }
}
