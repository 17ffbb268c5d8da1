//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate runs the histogram transform over the regions of a host
//! document:
//!
//! - [`orchestrator`]: region resolution, validation and edit application
//! - [`dto`]: data transfer objects returned to the host
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod dto;
pub mod orchestrator;

pub use dto::{HistogramOutcome, RegionOutcome};
pub use orchestrator::{CreateHistogram, resolve_regions};
