// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod line_ending;
pub mod span;

pub use counts::Occurrences;
pub use line_ending::LineEnding;
pub use span::Span;
