mod args;
pub mod parsers;

pub use args::Args;
use line_histogram_infra::{DocumentSink, DocumentSource};
use line_histogram_shared_kernel::{PresentationError, PresentationResult};
use log::LevelFilter;

use crate::config::Config;

/// Map `-q` / `-v` flags to a log level; warnings are shown by default.
pub fn log_level(args: &Args) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

fn make_sink(args: &Args, source: &DocumentSource) -> PresentationResult<DocumentSink> {
    if args.in_place {
        return source
            .path()
            .map(|path| DocumentSink::InPlace(path.to_path_buf()))
            .ok_or(PresentationError::InPlaceRequiresFile);
    }
    Ok(args.output.clone().map_or(DocumentSink::Stdout, DocumentSink::File))
}

/// Convert parsed CLI arguments into a configuration.
///
/// # Errors
///
/// Returns [`PresentationError::InPlaceRequiresFile`] when `--in-place` is
/// combined with standard input.
pub fn build_config(args: &Args) -> PresentationResult<Config> {
    let source = DocumentSource::from_arg(args.file.as_deref());
    let sink = make_sink(args, &source)?;

    Ok(Config {
        source,
        sink,
        regions: args.regions.clone(),
        log_level: log_level(args),
    })
}
