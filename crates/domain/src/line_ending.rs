// crates/domain/src/line_ending.rs
use line_histogram_shared_kernel::LineEnding;

/// Pick the line-ending style for a whole region.
///
/// CRLF wins whenever it appears anywhere, since every CRLF also contains an
/// LF. Pure LF is chosen only when at least one `\n` exists and no `\r\n`
/// does. Text without any line break falls back to CRLF.
pub fn detect(text: &str) -> LineEnding {
    if !text.contains("\r\n") && text.contains('\n') {
        LineEnding::Lf
    } else {
        LineEnding::Crlf
    }
}
