// src/app.rs
use anyhow::{Context, Result};
use log::debug;
use std::io;

use crate::shell::ConsoleShell;

/// Runs one prompt, compute and display cycle against the process console.
pub fn run() -> Result<()> {
    debug!("prime_range v{}", crate::VERSION);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = ConsoleShell::new(stdin.lock(), stdout.lock());
    shell.run().context("console session failed")
}
