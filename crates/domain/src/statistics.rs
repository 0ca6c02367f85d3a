// crates/domain/src/statistics.rs
use prime_range_shared_kernel::PrimeCount;

use crate::sieve::primes_in_range;

/// 表示する末尾の素数の最大個数
pub const LAST_PRIMES_LEN: usize = 3;

/// Summary of one range query.
///
/// `last_primes` is the ascending suffix of the primes found, so it holds the
/// largest values in the range. It is shorter than [`LAST_PRIMES_LEN`] when
/// fewer primes exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeStatistics {
    last_primes: Vec<u64>,
    count: PrimeCount,
}

impl RangeStatistics {
    pub fn from_primes(primes: &[u64]) -> Self {
        let tail = primes.len().saturating_sub(LAST_PRIMES_LEN);
        Self {
            last_primes: primes[tail..].to_vec(),
            count: PrimeCount::new(primes.len()),
        }
    }

    pub fn last_primes(&self) -> &[u64] {
        &self.last_primes
    }

    pub fn count(&self) -> PrimeCount {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_zero()
    }
}

/// Computes the last primes and the prime count for `[start, end]`.
pub fn range_statistics(start: i64, end: i64) -> RangeStatistics {
    RangeStatistics::from_primes(&primes_in_range(start, end))
}
