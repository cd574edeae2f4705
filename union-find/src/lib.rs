//! Disjoint-set forests over the sites `0..n`.
//!
//! Two variants share the [`Connectivity`] interface:
//!
//! - [`WeightedQuickUnion`] attaches the smaller tree under the larger one and
//!   halves paths during `find`, keeping an approximate `depth` per site.
//! - [`DeepestLeafUnion`] attaches the tree with the shallower deepest leaf
//!   under the other one, never compresses, and keeps `depth` exact.
//!
//! ```
//! use union_find::{Connectivity, WeightedQuickUnion};
//!
//! let mut uf = WeightedQuickUnion::new(5);
//! uf.union(0, 1).unwrap();
//! uf.union(2, 3).unwrap();
//! assert_eq!(uf.count(), 3);
//! assert!(uf.connected(0, 1).unwrap());
//! assert!(!uf.connected(1, 2).unwrap());
//! ```

mod depth_weighted;
mod error;
mod size_weighted;

#[cfg(test)]
mod properties;

pub use depth_weighted::DeepestLeafUnion;
pub use error::{Result, UnionFindError};
pub use size_weighted::WeightedQuickUnion;

/// Dynamic connectivity over a fixed universe of sites.
///
/// Every fallible operation validates all of its indices before touching any
/// internal state, so an `Err` leaves the structure unchanged.
pub trait Connectivity: Sized {
    /// Creates `n` singleton components.
    fn with_sites(n: usize) -> Self;

    /// Number of sites in the universe.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root of the component containing `p`.
    fn find(&mut self, p: usize) -> Result<usize>;

    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        check_index(p, self.len())?;
        check_index(q, self.len())?;
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the components of `p` and `q`.
    ///
    /// Returns `true` if two components were merged, `false` if they were
    /// already the same one.
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    /// Number of components.
    fn count(&self) -> usize;

    /// Human-readable listing of the internal arrays.
    fn dump(&self) -> String;
}

pub(crate) fn check_index(p: usize, len: usize) -> Result<()> {
    if p >= len {
        return Err(UnionFindError::IndexOutOfRange { index: p, len });
    }
    Ok(())
}

/// Converts a signed site count into a length, rejecting negatives.
pub(crate) fn checked_sites(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| UnionFindError::InvalidArgument { sites: n })
}
