// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

/// 範囲内で見つかった素数の個数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimeCount(usize);

impl PrimeCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for PrimeCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for PrimeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<usize> for PrimeCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}
