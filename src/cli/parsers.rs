use std::str::FromStr;

use line_histogram_shared_kernel::{DomainResult, PresentationError, Span};

/// Wrapper type to parse a region as `START..END` or open-ended `START..`.
///
/// Offsets are bytes into the document. An open end is resolved once the
/// document length is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanArg {
    pub start: usize,
    pub end: Option<usize>,
}

impl SpanArg {
    /// Fix an open end to `len` and build the span.
    pub fn resolve(self, len: usize) -> DomainResult<Span> {
        Span::new(self.start, self.end.unwrap_or(len))
    }
}

impl FromStr for SpanArg {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| PresentationError::InvalidSpan {
            value: s.to_string(),
            reason,
        };

        let cleaned = s.trim().replace('_', "");
        let (start_str, end_str) = cleaned
            .split_once("..")
            .ok_or_else(|| invalid("expected START..END".to_string()))?;

        let start = parse_offset(start_str).map_err(invalid)?;
        let end = match end_str.trim() {
            "" => None,
            end => Some(parse_offset(end).map_err(invalid)?),
        };

        if let Some(end) = end
            && end < start
        {
            return Err(invalid(format!("start {start} is after end {end}")));
        }
        Ok(Self { start, end })
    }
}

fn parse_offset(s: &str) -> Result<usize, String> {
    let s = s.trim();
    s.parse::<usize>()
        .map_err(|err| format!("invalid offset '{s}': {err}"))
}
