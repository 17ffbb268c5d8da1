// crates/shared-kernel/src/value_objects/span.rs
use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Half-open byte range `start..end` into a document.
///
/// Construction guarantees `start <= end`; whether the range fits a given
/// text is checked separately by [`Span::check_against`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct Span {
    start: usize,
    end: usize,
}

/// Unchecked wire form; deserialization goes through [`Span::new`].
#[derive(Deserialize)]
struct RawSpan {
    start: usize,
    end: usize,
}

impl TryFrom<RawSpan> for Span {
    type Error = DomainError;

    fn try_from(raw: RawSpan) -> DomainResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl Span {
    pub const fn new(start: usize, end: usize) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// A zero-width span, i.e. a cursor with nothing selected.
    pub const fn cursor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Span covering all of `text`.
    pub const fn whole(text: &str) -> Self {
        Self { start: 0, end: text.len() }
    }

    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Two spans overlap when they share at least one byte, so an empty
    /// span never overlaps anything.
    pub const fn overlaps(self, other: Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// Verify the span lies inside `text` on UTF-8 character boundaries.
    pub fn check_against(self, text: &str) -> DomainResult<()> {
        if self.end > text.len() {
            return Err(DomainError::SpanOutOfBounds { span: self, len: text.len() });
        }
        if !text.is_char_boundary(self.start) || !text.is_char_boundary(self.end) {
            return Err(DomainError::SpanNotOnCharBoundary { span: self });
        }
        Ok(())
    }

    /// Borrow the slice of `text` this span covers, if it is valid for `text`.
    pub fn slice(self, text: &str) -> DomainResult<&str> {
        self.check_against(text)?;
        Ok(&text[self.range()])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(Span::new(4, 2), Err(DomainError::InvertedSpan { start: 4, end: 2 }));
        assert!(Span::new(2, 2).is_ok_and(Span::is_empty));
    }

    #[test]
    fn adjacent_spans_do_not_overlap() {
        let a = Span::new(0, 5).unwrap();
        let b = Span::new(5, 9).unwrap();
        assert!(!a.overlaps(b));
        assert!(!b.overlaps(a));
        assert!(a.overlaps(Span::new(4, 6).unwrap()));
    }

    #[test]
    fn cursor_inside_span_does_not_overlap() {
        let a = Span::new(0, 5).unwrap();
        assert!(!a.overlaps(Span::cursor(3)));
    }

    #[test]
    fn check_against_reports_out_of_bounds() {
        let span = Span::new(0, 10).unwrap();
        assert_eq!(
            span.check_against("short"),
            Err(DomainError::SpanOutOfBounds { span, len: 5 })
        );
    }

    #[test]
    fn check_against_reports_split_characters() {
        // 'é' is two bytes wide.
        let span = Span::new(0, 1).unwrap();
        assert_eq!(
            span.check_against("é"),
            Err(DomainError::SpanNotOnCharBoundary { span })
        );
    }

    #[test]
    fn slice_borrows_covered_text() {
        let text = "alpha\nbeta\n";
        assert_eq!(Span::new(6, 10).unwrap().slice(text), Ok("beta"));
        assert_eq!(Span::whole(text).slice(text), Ok(text));
    }
}
