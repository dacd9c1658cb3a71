//! A segment tree with lazy propagation: range updates and range queries.
//!
//! See [`LazySegmentTree`]

use crate::data::{Action, Monoid};

use super::resolve_range;
use std::ops::RangeBounds;

/// A segment tree that can also apply an [`Action`] to a whole range of
/// positions in `O(log n)`.
///
/// Pending actions are stored on internal nodes and pushed one level down
/// whenever a query or update needs to descend past them, so queries take
/// `&mut self` even though they don't change what the tree represents.
#[derive(Clone)]
pub struct LazySegmentTree<A: Action> {
    tree: Vec<A::Summary>,
    lazy: Vec<A>,
    marked: Vec<bool>,
    len: usize,
}

fn nodes_count(len: usize) -> usize {
    4 * len
}

impl<A: Action> LazySegmentTree<A> {
    /// Creates a tree of `len` empty summaries.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![A::Summary::EMPTY; nodes_count(len)],
            lazy: vec![A::IDENTITY; nodes_count(len)],
            marked: vec![false; nodes_count(len)],
            len,
        }
    }

    /// The number of positions in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the tree has no positions.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears every position back to the empty summary and drops all pending
    /// actions, keeping the length.
    pub fn reset(&mut self) {
        for node in &mut self.tree {
            *node = A::Summary::EMPTY;
        }
        for tag in &mut self.lazy {
            *tag = A::IDENTITY;
        }
        for mark in &mut self.marked {
            *mark = false;
        }
    }

    /// Overwrites the whole tree with the given summaries, dropping all
    /// pending actions.
    /// O(n)
    pub fn assign(&mut self, values: &[A::Summary]) {
        assert!(
            values.len() == self.len,
            "Cannot assign {} values to a segment tree of length {}",
            values.len(),
            self.len
        );
        for tag in &mut self.lazy {
            *tag = A::IDENTITY;
        }
        for mark in &mut self.marked {
            *mark = false;
        }
        if !self.is_empty() {
            self.build(1, 0, self.len, values);
        }
    }

    /// Applies `action` to every position in `range`.
    /// O(log n)
    pub fn apply<R: RangeBounds<usize>>(&mut self, range: R, action: A) {
        let range = resolve_range(range, self.len);
        if !range.is_empty() {
            self.apply_rec(1, 0, self.len, range.start, range.end, action);
        }
    }

    /// Calculates the summary of the values in `range`.
    /// O(log n)
    pub fn summary<R: RangeBounds<usize>>(&mut self, range: R) -> A::Summary {
        let range = resolve_range(range, self.len);
        if range.is_empty() {
            return A::Summary::EMPTY;
        }
        self.summary_rec(1, 0, self.len, range.start, range.end)
    }

    /// The summary at position `index`.
    /// O(log n)
    pub fn get(&mut self, index: usize) -> A::Summary {
        assert!(
            index < self.len,
            "Index {index} is out of bounds of segment tree length {}",
            self.len
        );
        self.summary_rec(1, 0, self.len, index, index + 1)
    }

    /// Sets the summary at position `index` to `summary` and recalculates.
    /// O(log n)
    pub fn set(&mut self, index: usize, summary: A::Summary) {
        assert!(
            index < self.len,
            "Index {index} is out of bounds of segment tree length {}",
            self.len
        );
        self.for_each_mut(index..index + 1, |node| {
            *node = summary;
            true
        });
    }

    /// Visits the summary of every position in `range`, in index order, with
    /// mutable access. Returning `false` from the callback stops the visit.
    ///
    /// O(k log n) for k visited positions.
    pub fn for_each_mut<R, F>(&mut self, range: R, mut func: F)
    where
        R: RangeBounds<usize>,
        F: FnMut(&mut A::Summary) -> bool,
    {
        let range = resolve_range(range, self.len);
        if !range.is_empty() {
            self.for_each_rec(1, 0, self.len, range.start, range.end, &mut func);
        }
    }

    /// Overwrites every position in `range` with `summary`.
    pub fn fill<R: RangeBounds<usize>>(&mut self, range: R, summary: A::Summary) {
        self.for_each_mut(range, |node| {
            *node = summary;
            true
        });
    }

    // Records `action` on node `p`, which covers `seg_len` positions.
    fn make_lazy(&mut self, p: usize, seg_len: usize, action: A) {
        self.tree[p] = action.apply(self.tree[p], seg_len);
        self.lazy[p] = if self.marked[p] {
            action.compose(self.lazy[p])
        } else {
            action
        };
        self.marked[p] = true;
    }

    // Moves the pending action of node `p`, covering `l..r`, to its sons.
    fn push_down(&mut self, p: usize, l: usize, r: usize) {
        if self.marked[p] {
            let mid = (l + r) / 2;
            let tag = self.lazy[p];
            self.make_lazy(2 * p, mid - l, tag);
            self.make_lazy(2 * p + 1, r - mid, tag);
            self.lazy[p] = A::IDENTITY;
            self.marked[p] = false;
        }
    }

    fn push_up(&mut self, p: usize) {
        self.tree[p] = self.tree[2 * p].merge(self.tree[2 * p + 1]);
    }

    fn build(&mut self, p: usize, l: usize, r: usize, values: &[A::Summary]) {
        if r - l == 1 {
            self.tree[p] = values[l];
            return;
        }
        let mid = (l + r) / 2;
        self.build(2 * p, l, mid, values);
        self.build(2 * p + 1, mid, r, values);
        self.push_up(p);
    }

    fn apply_rec(&mut self, p: usize, l: usize, r: usize, x: usize, y: usize, action: A) {
        if x <= l && r <= y {
            self.make_lazy(p, r - l, action);
            return;
        }
        self.push_down(p, l, r);
        let mid = (l + r) / 2;
        if x < mid {
            self.apply_rec(2 * p, l, mid, x, y, action);
        }
        if y > mid {
            self.apply_rec(2 * p + 1, mid, r, x, y, action);
        }
        self.push_up(p);
    }

    fn summary_rec(&mut self, p: usize, l: usize, r: usize, x: usize, y: usize) -> A::Summary {
        if x <= l && r <= y {
            return self.tree[p];
        }
        self.push_down(p, l, r);
        let mid = (l + r) / 2;
        if y <= mid {
            self.summary_rec(2 * p, l, mid, x, y)
        } else if x >= mid {
            self.summary_rec(2 * p + 1, mid, r, x, y)
        } else {
            let left = self.summary_rec(2 * p, l, mid, x, y);
            let right = self.summary_rec(2 * p + 1, mid, r, x, y);
            left.merge(right)
        }
    }

    fn for_each_rec<F>(&mut self, p: usize, l: usize, r: usize, x: usize, y: usize, func: &mut F) -> bool
    where
        F: FnMut(&mut A::Summary) -> bool,
    {
        if r - l == 1 {
            return func(&mut self.tree[p]);
        }
        self.push_down(p, l, r);
        let mid = (l + r) / 2;
        let mut continues = true;
        if x < mid {
            continues = self.for_each_rec(2 * p, l, mid, x, y, func);
        }
        if y > mid && continues {
            continues = self.for_each_rec(2 * p + 1, mid, r, x, y, func);
        }
        self.push_up(p);
        continues
    }
}

impl<A: Action> FromIterator<A::Summary> for LazySegmentTree<A> {
    /// Creates a lazy segment tree from an iterator of one-element summaries.
    /// O(n)
    fn from_iter<T: IntoIterator<Item = A::Summary>>(iter: T) -> Self {
        let values: Vec<A::Summary> = iter.into_iter().collect();
        let mut res = Self::new(values.len());
        res.assign(&values);
        res
    }
}
