// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

//! Prime Engine: pure computation over integer ranges.
//!
//! Nothing in this crate performs I/O. Every function accepts arbitrary
//! signed bounds and degrades to an empty result instead of failing.

pub mod range;
pub mod sieve;
pub mod statistics;

pub use range::PrimeRange;
pub use sieve::{is_prime, primes_in_range, primes_up_to};
pub use statistics::{LAST_PRIMES_LEN, RangeStatistics, range_statistics};
