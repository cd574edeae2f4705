use rand::Rng;
use serde::Serialize;
use union_find::{Connectivity, WeightedQuickUnion};

use crate::benchmark::{Benchmark, BenchmarkError};

/// Draws random pairs until they connect all `n` sites.
///
/// The same seed always yields the same sequence, so every timed repetition
/// replays identical unions.
pub fn connecting_pairs(n: usize, rng: &mut impl Rng) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    if n == 0 {
        return pairs;
    }
    let mut reference = WeightedQuickUnion::new(n);
    while reference.count() > 1 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        pairs.push((p, q));
        reference.union(p, q).expect("pair drawn from 0..n");
    }
    pairs
}

#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub variant: String,
    pub sites: usize,
    pub pairs: usize,
    pub runs: usize,
    pub mean_ms: f64,
}

/// Times replaying `pairs` on a fresh `U` of `n` sites.
pub fn measure<U: Connectivity>(
    variant: &str,
    n: usize,
    pairs: &[(usize, usize)],
    runs: usize,
) -> Result<Measurement, BenchmarkError> {
    check_pairs(n, pairs)?;

    let expected = if n == 0 { 0 } else { 1 };
    let mut bench = Benchmark::new(format!("{variant} connecting {n} sites"), |uf: &mut U| {
        for &(p, q) in pairs {
            uf.union(p, q).expect("pairs checked against n");
        }
    })
    .with_pre(move |_| U::with_sites(n))
    .with_post(move |uf: &U| {
        if uf.count() == expected {
            Ok(())
        } else {
            Err(format!("expected {expected} component(s), found {}", uf.count()))
        }
    });

    let mean_ms = bench.run_from_supplier(|| U::with_sites(0), runs)?;
    Ok(Measurement {
        variant: variant.to_string(),
        sites: n,
        pairs: pairs.len(),
        runs,
        mean_ms,
    })
}

fn check_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<(), BenchmarkError> {
    for (position, &(p, q)) in pairs.iter().enumerate() {
        if let Some(index) = [p, q].into_iter().find(|&i| i >= n) {
            return Err(BenchmarkError::InvalidPair {
                position,
                index,
                len: n,
            });
        }
    }
    Ok(())
}

/// Site counts `base, 2 * base, 4 * base, ...`, `doublings` of them.
pub fn doubling_sizes(base: usize, doublings: u32) -> Result<Vec<usize>, BenchmarkError> {
    (0..doublings)
        .map(|i| {
            1usize
                .checked_shl(i)
                .and_then(|factor| base.checked_mul(factor))
                .ok_or(BenchmarkError::SizeOverflow { base, doublings })
        })
        .collect()
}
