// src/shell.rs
//! Interactive console loop.
//!
//! The shell is generic over its reader and writer so the same loop serves
//! the locked process console and in-memory buffers.

use log::info;
use prime_range_domain::{PrimeRange, RangeStatistics};
use prime_range_shared_kernel::{
    ErrorContext, InfraResult, InfrastructureError, PresentationError, PresentationResult, Result,
};
use std::io::{BufRead, Write};

use crate::presentation::{self, END_PROMPT, START_PROMPT};

pub struct ConsoleShell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompts, computes and prints the result for a single range.
    pub fn run(&mut self) -> Result<()> {
        let range = self.read_range()?;
        let stats = range.statistics();
        info!("range {range}: {} primes", stats.count());
        self.display(&range, &stats)
    }

    /// Prompts until a valid range is entered.
    ///
    /// There is no attempt limit. The loop only ends early when input is
    /// exhausted or the console fails.
    pub fn read_range(&mut self) -> Result<PrimeRange> {
        loop {
            let start = match parse_integer(&self.ask(START_PROMPT).context("reading start of range")?) {
                Ok(value) => value,
                Err(err) => {
                    self.reject(&err)?;
                    continue;
                }
            };
            let end = match parse_integer(&self.ask(END_PROMPT).context("reading end of range")?) {
                Ok(value) => value,
                Err(err) => {
                    self.reject(&err)?;
                    continue;
                }
            };

            match PrimeRange::try_new(start, end) {
                Ok(range) => return Ok(range),
                Err(err) => self.reject(&err)?,
            }
        }
    }

    pub fn display(&mut self, range: &PrimeRange, stats: &RangeStatistics) -> Result<()> {
        presentation::write_results(&mut self.writer, range, stats)
            .and_then(|()| self.writer.flush())
            .map_err(|source| InfrastructureError::ConsoleWrite { source })?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> InfraResult<String> {
        write!(self.writer, "{prompt}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| InfrastructureError::ConsoleWrite { source })?;

        // lossy decode: undecodable bytes are rejected by the parser
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| InfrastructureError::ConsoleRead { source })?;
        if read == 0 {
            return Err(InfrastructureError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn reject(&mut self, err: &dyn std::error::Error) -> InfraResult<()> {
        info!("rejected input: {err}");
        presentation::write_error(&mut self.writer, err)
            .map_err(|source| InfrastructureError::ConsoleWrite { source })
    }
}

/// Parses one answer.
///
/// Surrounding whitespace and a leading `+` are accepted, as are single `_`
/// separators between digits (`1_000`).
pub fn parse_integer(raw: &str) -> PresentationResult<i64> {
    let trimmed = raw.trim();
    let invalid = || PresentationError::InvalidInteger { input: trimmed.to_string() };

    strip_digit_separators(trimmed).ok_or_else(invalid)?.parse::<i64>().map_err(|_| invalid())
}

fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        if !(before.is_some_and(char::is_ascii_digit) && after.is_some_and(char::is_ascii_digit)) {
            return None;
        }
    }
    Some(digits)
}
