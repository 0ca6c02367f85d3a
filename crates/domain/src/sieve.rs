// crates/domain/src/sieve.rs
use log::debug;

/// Returns every prime in `[2, limit]` in ascending order.
///
/// Bounds below 2 (negative ones included) produce an empty vector.
/// The primality table is local to the call and dropped on return.
pub fn primes_up_to(limit: i64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let Ok(n) = usize::try_from(limit) else {
        return Vec::new();
    };

    debug!("sieving primality table of {} entries", n + 1);

    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    // p * p <= n without the overflow of squaring near usize::MAX
    let mut p = 2usize;
    while p <= n / p {
        if is_prime[p] {
            for multiple in (p * p..=n).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as u64))
        .collect()
}

/// Returns the primes in the inclusive range `[start, end]`.
///
/// An inverted range or a negative bound yields an empty vector.
pub fn primes_in_range(start: i64, end: i64) -> Vec<u64> {
    if start > end || start < 0 || end < 0 {
        return Vec::new();
    }
    let lower = start as u64;
    let mut primes = primes_up_to(end);
    primes.retain(|&p| p >= lower);
    primes
}

/// Trial division check.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
