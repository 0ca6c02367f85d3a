// crates/domain/src/range.rs
use std::fmt;

use prime_range_shared_kernel::{DomainError, DomainResult};

use crate::statistics::{RangeStatistics, range_statistics};

/// Validated inclusive range with `0 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeRange {
    start: u64,
    end: u64,
}

impl PrimeRange {
    /// Ordering is checked before sign, so `[5, -1]` reports the ordering error.
    pub fn try_new(start: i64, end: i64) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::StartAfterEnd { start, end });
        }
        if start < 0 || end < 0 {
            return Err(DomainError::NegativeBound { start, end });
        }
        Ok(Self { start: start as u64, end: end as u64 })
    }

    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> u64 {
        self.end
    }

    pub fn statistics(&self) -> RangeStatistics {
        // both bounds originated from non-negative i64 values
        range_statistics(self.start as i64, self.end as i64)
    }
}

impl fmt::Display for PrimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
