// crates/shared-kernel/src/value_objects/mod.rs
mod counts;

pub use counts::PrimeCount;
