//! Disjoint sets with undo.

/// A disjoint-set forest whose unions can be undone.
///
/// Union by size without path compression keeps every successful
/// [`unite`](RollbackUnionFind::unite) down to two cell overwrites, which is
/// exactly what [`undo`](RollbackUnionFind::undo) reverts. The price is that
/// [`find`](RollbackUnionFind::find) is `O(log n)` instead of amortized
/// near-constant; in exchange it takes `&self`.
///
/// The usual pattern is offline divide-and-conquer over queries: take a
/// [`checkpoint`](RollbackUnionFind::checkpoint), unite, recurse, then
/// [`rollback`](RollbackUnionFind::rollback).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RollbackUnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    // (larger root, smaller root) of each successful unite, in order.
    history: Vec<(usize, usize)>,
}

impl RollbackUnionFind {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            history: Vec::new(),
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
        self.len() - self.history.len()
    }

    /// The representative of the set containing `u`.
    /// O(log n)
    pub fn find(&self, mut u: usize) -> usize {
        assert!(
            u < self.len(),
            "Element {u} is out of bounds of union-find length {}",
            self.len()
        );
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }

    /// Merges the sets containing `u` and `v`. Returns whether a merge
    /// actually happened; only successful merges are recorded for undo.
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let mut fu = self.find(u);
        let mut fv = self.find(v);
        if fu == fv {
            return false;
        }
        if self.size[fu] < self.size[fv] {
            std::mem::swap(&mut fu, &mut fv);
        }
        self.history.push((fu, fv));
        self.parent[fv] = fu;
        self.size[fu] += self.size[fv];
        true
    }

    /// Checks whether `u` and `v` are in the same set.
    pub fn connected(&self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// The number of elements in the set containing `u`.
    pub fn component_size(&self, u: usize) -> usize {
        self.size[self.find(u)]
    }

    /// Reverts the latest successful [`unite`](RollbackUnionFind::unite).
    /// Does nothing if there is none.
    pub fn undo(&mut self) {
        if let Some((root, child)) = self.history.pop() {
            self.size[root] -= self.size[child];
            self.parent[child] = child;
        }
    }

    /// A point in the union history that [`rollback`](RollbackUnionFind::rollback)
    /// can return to.
    pub fn checkpoint(&self) -> usize {
        self.history.len()
    }

    /// Undoes unions until the history is back at `checkpoint`.
    pub fn rollback(&mut self, checkpoint: usize) {
        while self.history.len() > checkpoint {
            self.undo();
        }
    }

    /// Appends `extra` new singleton sets.
    pub fn expand(&mut self, extra: usize) {
        let old_len = self.len();
        self.parent.extend(old_len..old_len + extra);
        self.size.resize(old_len + extra, 1);
    }
}
