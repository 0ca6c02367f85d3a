// src/presentation.rs
use prime_range_domain::{PrimeRange, RangeStatistics};
use std::io::{self, Write};

pub const START_PROMPT: &str = "Please enter the start of the range (non-negative integer): ";
pub const END_PROMPT: &str = "Please enter the end of the range (non-negative integer): ";

/// Writes the result lines for one query.
///
/// The count line is always printed, also when no primes were found.
pub fn write_results<W: Write>(
    out: &mut W,
    range: &PrimeRange,
    stats: &RangeStatistics,
) -> io::Result<()> {
    let last = stats.last_primes();
    if last.is_empty() {
        writeln!(out, "No prime numbers found in the range {range}")?;
    } else {
        writeln!(out, "The last prime numbers in the range {range} are: {}", join_primes(last))?;
    }
    writeln!(out, "The number of prime numbers in this range is: {}", stats.count())
}

/// Error lines share a fixed prefix.
pub fn write_error<W: Write>(out: &mut W, err: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}

fn join_primes(primes: &[u64]) -> String {
    primes.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
}
