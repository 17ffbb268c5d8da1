// crates/infra/src/lib.rs
pub mod document;
pub mod persistence;

pub use document::MemoryDocument;
pub use persistence::{DocumentSink, DocumentSource};
