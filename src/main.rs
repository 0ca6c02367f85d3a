// src/main.rs
use clap::Parser;
use prime_range::args::Args;
use prime_range::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);
    if !args.ignored.is_empty() {
        log::debug!("ignoring positional arguments: {:?}", args.ignored);
    }

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
