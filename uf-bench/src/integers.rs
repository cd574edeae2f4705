//! Integer arrays in the orderings used for sorting experiments.

use clap::ValueEnum;
use rand::Rng;

const VALUE_BOUND: i64 = 10_000;
const MAX_ORDERED_PREFIX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Ordering {
    /// Uniform values in 0..10000
    Random,
    /// 0, 1, ..., n-1
    Ordered,
    /// A short ascending prefix followed by random values
    PartOrdered,
    /// n, n-1, ..., 1
    Reverse,
}

pub fn generate(ordering: Ordering, n: usize, rng: &mut impl Rng) -> Vec<i64> {
    match ordering {
        Ordering::Random => (0..n).map(|_| rng.gen_range(0..VALUE_BOUND)).collect(),
        Ordering::Ordered => (0..n as i64).collect(),
        Ordering::PartOrdered => {
            let prefix = rng.gen_range(0..MAX_ORDERED_PREFIX).min(n);
            let mut values: Vec<i64> = (0..prefix as i64).collect();
            values.extend((prefix..n).map(|_| rng.gen_range(0..VALUE_BOUND)));
            values
        }
        Ordering::Reverse => (1..=n as i64).rev().collect(),
    }
}
