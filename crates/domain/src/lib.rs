//! # Domain
//!
//! The line histogram transformer.
//!
//! - [`line_ending`]: pick LF or CRLF for a region
//! - [`histogram`]: split a region and count distinct non-empty lines
//! - [`report`]: order counted lines by descending count
//! - [`render`]: lay a report out as aligned `count line` rows
//! - [`pad`]: left padding helper used for the count column
//! - [`transform`]: the whole pipeline for one region
//!
//! Everything here is pure and infallible; host concerns live in the ports
//! and use case crates.

pub mod histogram;
pub mod line_ending;
pub mod pad;
pub mod render;
pub mod report;
pub mod transform;

pub use histogram::Histogram;
pub use pad::left_pad;
pub use render::render;
pub use report::{Report, ReportEntry};
pub use transform::{RegionSummary, Transformed, histogram_text, transform};
