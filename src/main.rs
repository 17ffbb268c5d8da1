use std::process::ExitCode;

use clap::Parser;
use line_histogram::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &cli::Args) -> anyhow::Result<()> {
    let config = cli::build_config(args)?;
    logging::init(config.log_level);
    app::run(&config)?;
    Ok(())
}
