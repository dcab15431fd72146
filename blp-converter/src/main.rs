//! Main entry point for the blp-converter CLI

#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::Result;
use blp_converter::batch;
use blp_converter::cli::Cli;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger, the verbosity flags override RUST_LOG
    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.verbose > 0 {
        logger.filter_level(match cli.verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    } else if cli.quiet {
        logger.filter_level(LevelFilter::Error);
    }
    logger.init();

    let summary = batch::run(&cli)?;
    if summary.failed() > 0 {
        eprintln!("Failed to convert {} image(s)", summary.failed());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
