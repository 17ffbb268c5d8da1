//! # Ports
//!
//! Interface definitions for the host environment.
//!
//! - [`document`]: the text buffer a histogram command reads selections
//!   from and writes replacements back into
//!
//! The use case crate depends only on these traits, never on a concrete
//! editor or file system.

// crates/ports/src/lib.rs
pub mod document;

pub use document::{Edit, TextDocument};
