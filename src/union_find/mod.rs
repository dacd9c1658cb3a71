//! Disjoint sets.
//!
//! [`UnionFind`] is the everyday version: path compression plus union by
//! size, with near-constant amortized operations. [`RollbackUnionFind`]
//! trades the compression away so that every union can be undone.

mod rollback;

pub use rollback::RollbackUnionFind;

/// A disjoint-set forest with path compression and union by size.
///
/// Elements are `0..len`. Each operation takes amortized near-constant time
/// (inverse Ackermann).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Checks if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The current number of disjoint sets.
    pub fn count(&self) -> usize {
        self.components
    }

    /// The representative of the set containing `u`, compressing the path
    /// walked.
    pub fn find(&mut self, u: usize) -> usize {
        assert!(
            u < self.len(),
            "Element {u} is out of bounds of union-find length {}",
            self.len()
        );
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point everything on the path straight at the root.
        let mut cur = u;
        while self.parent[cur] != root {
            cur = std::mem::replace(&mut self.parent[cur], root);
        }
        root
    }

    /// Merges the sets containing `u` and `v`. Returns whether a merge
    /// actually happened, i.e. whether they were in different sets.
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let mut fu = self.find(u);
        let mut fv = self.find(v);
        if fu == fv {
            return false;
        }
        if self.size[fu] < self.size[fv] {
            std::mem::swap(&mut fu, &mut fv);
        }
        self.parent[fv] = fu;
        self.size[fu] += self.size[fv];
        self.components -= 1;
        true
    }

    /// Checks whether `u` and `v` are in the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// The number of elements in the set containing `u`.
    pub fn component_size(&mut self, u: usize) -> usize {
        let root = self.find(u);
        self.size[root]
    }

    /// Appends `extra` new singleton sets.
    pub fn expand(&mut self, extra: usize) {
        let old_len = self.len();
        self.parent.extend(old_len..old_len + extra);
        self.size.resize(old_len + extra, 1);
        self.components += extra;
    }

    /// Splits everything back into singleton sets, keeping the length.
    pub fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        for size in &mut self.size {
            *size = 1;
        }
        self.components = self.len();
    }
}
