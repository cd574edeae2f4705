use std::fmt;

use crate::{Connectivity, Result, check_index, checked_sites};

/// Quick-union weighted by the depth of each component's deepest leaf.
///
/// Paths are never compressed. Every merge rewrites the depth of the whole
/// attached subtree, so `depth[i]` is always the hop count from `i` to its
/// root. Merging scans all sites, making `union` O(n) or worse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepestLeafUnion {
    parent: Vec<usize>,
    depth: Vec<usize>,
    count: usize,
}

impl DeepestLeafUnion {
    pub fn new(n: usize) -> Self {
        tracing::debug!(sites = n, "new deepest-leaf union");
        Self {
            parent: (0..n).collect(),
            depth: vec![0; n],
            count: n,
        }
    }

    pub fn try_new(n: i64) -> Result<Self> {
        checked_sites(n).map(Self::new)
    }

    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    pub fn depths(&self) -> &[usize] {
        &self.depth
    }

    fn root_of(&self, mut p: usize) -> usize {
        while p != self.parent[p] {
            p = self.parent[p];
        }
        p
    }

    /// Largest recorded depth among the sites rooted at `root`.
    fn deepest_leaf(&self, root: usize) -> usize {
        (0..self.parent.len())
            .filter(|&i| self.root_of(i) == root)
            .map(|i| self.depth[i])
            .max()
            .unwrap_or(0)
    }

    fn attach(&mut self, child: usize, root: usize) {
        self.parent[child] = root;
        self.depth[child] = self.depth[root] + 1;

        let mut stack = vec![child];
        while let Some(node) = stack.pop() {
            for i in 0..self.parent.len() {
                if self.parent[i] == node && i != node {
                    self.depth[i] = self.depth[node] + 1;
                    stack.push(i);
                }
            }
        }
    }
}

impl Connectivity for DeepestLeafUnion {
    fn with_sites(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, p: usize) -> Result<usize> {
        check_index(p, self.len())?;
        Ok(self.root_of(p))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        check_index(p, self.len())?;
        check_index(q, self.len())?;
        let root_p = self.root_of(p);
        let root_q = self.root_of(q);
        if root_p == root_q {
            return Ok(false);
        }
        if self.deepest_leaf(root_p) < self.deepest_leaf(root_q) {
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

impl fmt::Display for DeepestLeafUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (parent, depth)) in self.parent.iter().zip(&self.depth).enumerate() {
            writeln!(f, "{i}: {parent}, {depth}")?;
        }
        write!(f, "count: {}", self.count)
    }
}
