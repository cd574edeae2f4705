//! Invariants shared by both variants, checked against random union sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Connectivity, DeepestLeafUnion, WeightedQuickUnion};

fn apply<U: Connectivity>(n: usize, ops: &[(usize, usize)]) -> U {
    let mut uf = U::with_sites(n);
    for &(p, q) in ops {
        if p < n && q < n {
            uf.union(p, q).unwrap();
        }
    }
    uf
}

fn distinct_roots<U: Connectivity>(uf: &mut U) -> usize {
    let n = uf.len();
    let roots: HashSet<usize> = (0..n).map(|i| uf.find(i).unwrap()).collect();
    roots.len()
}

fn check_partition<U: Connectivity>(n: usize, ops: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut uf: U = apply(n, ops);
    let count = uf.count();
    prop_assert_eq!(distinct_roots(&mut uf), count);
    Ok(())
}

fn check_find_idempotent<U: Connectivity>(n: usize, ops: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut uf: U = apply(n, ops);
    for p in 0..n {
        let root = uf.find(p).unwrap();
        prop_assert_eq!(uf.find(root).unwrap(), root);
    }
    Ok(())
}

fn check_connected_relation<U: Connectivity>(
    n: usize,
    ops: &[(usize, usize)],
) -> Result<(), TestCaseError> {
    let mut uf: U = apply(n, ops);
    for x in 0..n {
        for y in 0..n {
            let xy = uf.connected(x, y).unwrap();
            prop_assert_eq!(xy, uf.connected(y, x).unwrap());
            for z in 0..n {
                if xy && uf.connected(y, z).unwrap() {
                    prop_assert!(
                        uf.connected(x, z).unwrap(),
                        "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                    );
                }
            }
        }
    }
    Ok(())
}

fn check_monotone_count<U: Connectivity>(n: usize, ops: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut uf = U::with_sites(n);
    for &(p, q) in ops {
        if p >= n || q >= n {
            continue;
        }
        let before = uf.count();
        let was_connected = uf.connected(p, q).unwrap();
        let merged = uf.union(p, q).unwrap();
        prop_assert_eq!(merged, !was_connected);
        prop_assert_eq!(uf.count(), if merged { before - 1 } else { before });

        prop_assert!(!uf.union(p, q).unwrap());
        prop_assert_eq!(uf.count(), before - usize::from(merged));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn partition_matches_count(
        n in 1_usize..24,
        ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
    ) {
        check_partition::<WeightedQuickUnion>(n, &ops)?;
        check_partition::<DeepestLeafUnion>(n, &ops)?;
    }

    #[test]
    fn find_is_idempotent(
        n in 1_usize..24,
        ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
    ) {
        check_find_idempotent::<WeightedQuickUnion>(n, &ops)?;
        check_find_idempotent::<DeepestLeafUnion>(n, &ops)?;
    }

    #[test]
    fn connected_is_symmetric_and_transitive(
        n in 2_usize..14,
        ops in proptest::collection::vec((0_usize..14, 0_usize..14), 0..30),
    ) {
        check_connected_relation::<WeightedQuickUnion>(n, &ops)?;
        check_connected_relation::<DeepestLeafUnion>(n, &ops)?;
    }

    #[test]
    fn union_decrements_count_at_most_once(
        n in 1_usize..24,
        ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
    ) {
        check_monotone_count::<WeightedQuickUnion>(n, &ops)?;
        check_monotone_count::<DeepestLeafUnion>(n, &ops)?;
    }

    #[test]
    fn variants_agree_on_components(
        n in 1_usize..24,
        ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
    ) {
        let mut a: WeightedQuickUnion = apply(n, &ops);
        let mut b: DeepestLeafUnion = apply(n, &ops);
        prop_assert_eq!(a.count(), b.count());
        for p in 0..n {
            for q in 0..n {
                prop_assert_eq!(a.connected(p, q).unwrap(), b.connected(p, q).unwrap());
            }
        }
    }

    #[test]
    fn deepest_leaf_depths_are_exact(
        n in 1_usize..32,
        ops in proptest::collection::vec((0_usize..32, 0_usize..32), 0..80),
    ) {
        let uf: DeepestLeafUnion = apply(n, &ops);
        for i in 0..n {
            let mut p = i;
            let mut hops = 0;
            while uf.parents()[p] != p {
                p = uf.parents()[p];
                hops += 1;
            }
            prop_assert_eq!(uf.depths()[i], hops, "site {}", i);
        }
    }

    #[test]
    fn sizes_sum_to_sites(
        n in 1_usize..24,
        ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
    ) {
        let mut uf: WeightedQuickUnion = apply(n, &ops);
        let mut total = 0;
        for i in 0..n {
            if uf.find(i).unwrap() == i {
                let members = (0..n).filter(|&j| uf.find(j).unwrap() == i).count();
                let size = uf.component_size(i).unwrap();
                prop_assert_eq!(size, members);
                total += size;
            }
        }
        prop_assert_eq!(total, n);
    }
}

#[test]
fn seeded_full_connection_reaches_one_component() {
    let n = 200;
    let mut rng = StdRng::seed_from_u64(20250906);
    let mut a = WeightedQuickUnion::new(n);
    let mut b = DeepestLeafUnion::new(n);
    while a.count() > 1 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        assert_eq!(a.union(p, q).unwrap(), b.union(p, q).unwrap());
    }
    assert_eq!(b.count(), 1);
    assert_eq!(distinct_roots(&mut a), 1);
    assert_eq!(distinct_roots(&mut b), 1);
}
