// src/app.rs
use line_histogram_infra::{DocumentSink, MemoryDocument};
use line_histogram_ports::TextDocument;
use line_histogram_shared_kernel::{DomainResult, ErrorContext, Result, Span};
use line_histogram_usecase::{CreateHistogram, HistogramOutcome};

use crate::config::Config;

/// Read the document, transform its regions and write the result.
///
/// # Errors
///
/// Fails when the document cannot be read or written, or when a region does
/// not fit the document. Nothing is written in the latter case.
pub fn run(config: &Config) -> Result<HistogramOutcome> {
    let text = config.source.read().with_context(|| describe_source(config))?;
    let selections = config
        .regions
        .iter()
        .map(|region| region.resolve(text.len()))
        .collect::<DomainResult<Vec<Span>>>()
        .context("resolving --region")?;

    log::debug!("read {} bytes, {} region(s) selected", text.len(), selections.len());
    let mut document = MemoryDocument::new(text).with_selections(selections);
    let outcome = CreateHistogram::new().run(&mut document)?;

    if config.in_place() && !outcome.changed() {
        log::info!("no region changed; leaving the file untouched");
    } else {
        config
            .sink
            .write(document.text())
            .with_context(|| describe_sink(&config.sink))?;
    }

    for region in &outcome.regions {
        log::info!(
            "{}: {} distinct of {} lines ({})",
            region.span,
            region.summary.distinct_lines,
            region.summary.counted_lines,
            region.summary.line_ending
        );
    }
    Ok(outcome)
}

fn describe_source(config: &Config) -> String {
    config.source.path().map_or_else(
        || "reading standard input".to_string(),
        |path| format!("reading {}", path.display()),
    )
}

fn describe_sink(sink: &DocumentSink) -> String {
    match sink {
        DocumentSink::Stdout => "writing standard output".to_string(),
        DocumentSink::File(path) | DocumentSink::InPlace(path) => {
            format!("writing {}", path.display())
        }
    }
}
