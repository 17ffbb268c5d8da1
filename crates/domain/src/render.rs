// crates/domain/src/render.rs
use std::fmt;

use crate::{pad::left_pad, report::Report};

/// Writes `count line` rows joined by the region's line ending.
///
/// Counts are left-padded with spaces to the report's display width. One
/// trailing line ending is written when the source region ended with one.
impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.display_width();
        let separator = self.line_ending().as_str();

        for (i, entry) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{} {}", left_pad(&entry.count.to_string(), width, ' '), entry.line)?;
        }

        if self.ends_with_line_ending() {
            f.write_str(separator)?;
        }
        Ok(())
    }
}

/// Render a report to its final text.
pub fn render(report: &Report<'_>) -> String {
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;

    fn render_text(text: &str) -> String {
        render(&Report::from_histogram(&Histogram::build(text)))
    }

    #[test]
    fn lf_report_keeps_trailing_newline() {
        assert_eq!(render_text("b\na\nb\n"), "2 b\n1 a\n");
    }

    #[test]
    fn crlf_report_without_trailing_break() {
        assert_eq!(render_text("x\r\ny\r\nx"), "2 x\r\n1 y");
    }

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(render_text(""), "");
    }

    #[test]
    fn single_digit_counts_get_no_extra_padding() {
        assert_eq!(render_text("a\na\na\nb\nb\n"), "3 a\n2 b\n");
    }

    #[test]
    fn counts_are_right_aligned_to_widest() {
        let text = "wide\n".repeat(10) + "narrow\n";
        assert_eq!(render_text(&text), "10 wide\n 1 narrow\n");
    }

    #[test]
    fn only_empty_lines_render_just_the_line_ending() {
        assert_eq!(render_text("\n\n\n"), "\n");
        assert_eq!(render_text("\r\n\r\n"), "\r\n");
    }

    #[test]
    fn single_line_without_break() {
        assert_eq!(render_text("solo"), "1 solo");
    }
}
