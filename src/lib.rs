// src/lib.rs
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use line_histogram_domain::histogram_text;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
