// crates/shared-kernel/tests/error_context.rs
use std::io;

use line_histogram_shared_kernel::{
    DomainError, ErrorContext, HistogramError, InfrastructureError, Span,
};

fn boom() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::StreamRead {
        origin: "<stdin>".to_owned(),
        source: io::Error::other("root-io"),
    })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("reading document").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading document"));
    assert!(display.contains("Failed to read <stdin>"));
    assert!(display.contains("root-io"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let span = Span::cursor(3);
    let err = Err::<(), _>(DomainError::OverlappingRegions { first: span, second: span })
        .with_context(|| format!("region #{}", 2))
        .unwrap_err();

    match err {
        HistogramError::Context { context, source } => {
            assert_eq!(context, "region #2");
            assert!(matches!(*source, HistogramError::Domain(DomainError::OverlappingRegions { .. })));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}
