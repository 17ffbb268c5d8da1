// crates/domain/src/transform.rs
use line_histogram_shared_kernel::{LineEnding, Occurrences};
use serde::{Deserialize, Serialize};

use crate::{histogram::Histogram, report::Report};

/// What a single region transform observed, for logging and host feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub line_ending: LineEnding,
    pub distinct_lines: usize,
    pub counted_lines: Occurrences,
    pub ends_with_line_ending: bool,
}

/// Replacement text for one region plus what was counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub summary: RegionSummary,
}

/// Run the full detect → count → sort → render pipeline over `text`.
///
/// Total over every input, including the empty string.
pub fn transform(text: &str) -> Transformed {
    let histogram = Histogram::build(text);
    let report = Report::from_histogram(&histogram);

    let summary = RegionSummary {
        line_ending: histogram.line_ending(),
        distinct_lines: histogram.distinct(),
        counted_lines: histogram.total(),
        ends_with_line_ending: histogram.ends_with_line_ending(),
    };
    log::trace!(
        "histogram: {} distinct of {} lines, {} endings",
        summary.distinct_lines,
        summary.counted_lines,
        summary.line_ending
    );

    Transformed { text: report.to_string(), summary }
}

/// Convenience wrapper returning only the rendered report.
pub fn histogram_text(text: &str) -> String {
    transform(text).text
}
