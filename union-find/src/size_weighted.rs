use std::fmt;

use crate::{Connectivity, Result, check_index, checked_sites};

/// Weighted quick-union with path halving.
///
/// `depth` is bookkeeping only: compression and merges adjust a node and its
/// direct children, so sites further down can drift from their true depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    depth: Vec<isize>,
    count: usize,
}

impl WeightedQuickUnion {
    pub fn new(n: usize) -> Self {
        tracing::debug!(sites = n, "new weighted quick-union");
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            depth: vec![0; n],
            count: n,
        }
    }

    /// Like [`WeightedQuickUnion::new`], for callers holding a signed count.
    pub fn try_new(n: i64) -> Result<Self> {
        checked_sites(n).map(Self::new)
    }

    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    pub fn depths(&self) -> &[isize] {
        &self.depth
    }

    /// Number of sites in the tree of `p`'s root.
    pub fn component_size(&mut self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    // Adds `delta` to every site recorded directly under `p`.
    fn shift_children(&mut self, p: usize, delta: isize) {
        for i in 0..self.parent.len() {
            if self.parent[i] == p && i != p {
                self.depth[i] += delta;
            }
        }
    }

    fn attach(&mut self, child: usize, root: usize) {
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.depth[child] = self.depth[root] + 1;
        self.shift_children(child, 1);
    }
}

impl Connectivity for WeightedQuickUnion {
    fn with_sites(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, p: usize) -> Result<usize> {
        check_index(p, self.len())?;
        let mut root = p;
        while root != self.parent[root] {
            let old = self.parent[root];
            self.parent[root] = self.parent[old];
            if old != self.parent[root] {
                self.depth[root] -= 1;
                self.shift_children(root, -1);
                self.size[old] -= self.size[root];
            }
            root = self.parent[root];
        }
        Ok(root)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        check_index(p, self.len())?;
        check_index(q, self.len())?;
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }
        if self.size[root_p] < self.size[root_q] {
            self.attach(root_p, root_q);
        } else {
            self.attach(root_q, root_p);
        }
        self.count -= 1;
        tracing::trace!(p, q, components = self.count, "merged");
        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeightedQuickUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ((parent, size), depth)) in
            self.parent.iter().zip(&self.size).zip(&self.depth).enumerate()
        {
            writeln!(f, "{i}: {parent}, {size}, {depth}")?;
        }
        write!(f, "count: {}", self.count)
    }
}
