mod cli;
mod input;
mod metrics;
mod model;
mod session;
mod text_summary;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout carries only prompts and the report
    tracing_subscriber::fmt()
        .with_max_level(match args.verbose {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        })
        .with_writer(std::io::stderr)
        .init();

    cli::run(args)
}
