//! A polynomial rolling hash with O(1) digests of arbitrary ranges.
//!
//! See [`RollingHash`]

use super::{Digest, BASE, MODULUS};

use std::ops::{Bound, RangeBounds};

/// Prefix digests of a sequence, supporting O(1) digests of arbitrary
/// ranges and hash-based substring searching.
///
/// The sequence itself is not stored; elements of any [`Digest`] type can be
/// pushed, even mixed. All answers are probabilistic in the usual rolling
/// hash sense: equal ranges always produce equal digests, unequal ranges
/// collide with probability around `1 / MODULUS`.
#[derive(Clone, Debug)]
pub struct RollingHash {
    // prefix[i] = (digest of the first i elements, BASE^i % MODULUS)
    prefix: Vec<(u64, u64)>,
}

impl RollingHash {
    /// Creates a hash of the empty sequence.
    pub fn new() -> Self {
        Self {
            prefix: vec![(0, 1)],
        }
    }

    /// The number of elements pushed so far.
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Checks if no elements were pushed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends one element.
    /// O(1)
    pub fn push<T: Digest + ?Sized>(&mut self, value: &T) {
        let (digest, power) = *self.prefix.last().unwrap();
        self.prefix.push((
            (digest * BASE % MODULUS + value.digest() % MODULUS) % MODULUS,
            power * BASE % MODULUS,
        ));
    }

    /// Removes the last `n` elements (all of them if there are fewer).
    pub fn pop(&mut self, n: usize) {
        let keep = self.len().saturating_sub(n);
        self.prefix.truncate(keep + 1);
    }

    /// The digest of the whole sequence.
    pub fn digest(&self) -> u64 {
        self.prefix.last().unwrap().0
    }

    /// The digest of the elements in `range`. The range is clamped to the
    /// sequence; an empty range gives 0.
    /// O(1)
    pub fn digest_range<R: RangeBounds<usize>>(&self, range: R) -> u64 {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        let end = end.min(self.len());
        if start >= end {
            return 0;
        }
        let window = end - start;
        let shifted = self.prefix[start].0 * self.prefix[window].1 % MODULUS;
        (self.prefix[end].0 + MODULUS - shifted) % MODULUS
    }

    /// The digest of the first `n` elements (all of them if there are fewer).
    pub fn front(&self, n: usize) -> u64 {
        self.prefix[n.min(self.len())].0
    }

    /// The digest of the last `n` elements (all of them if there are fewer).
    pub fn back(&self, n: usize) -> u64 {
        let n = n.min(self.len());
        self.digest_range(self.len() - n..)
    }

    /// Checks whether `needle`'s sequence occurs at position `pos`.
    pub fn matches(&self, needle: &RollingHash, pos: usize) -> bool {
        if pos + needle.len() > self.len() {
            return false;
        }
        self.digest_range(pos..pos + needle.len()) == needle.digest()
    }

    /// Checks whether the sequence starts with `needle`'s sequence.
    pub fn starts_with(&self, needle: &RollingHash) -> bool {
        self.matches(needle, 0)
    }

    /// Checks whether the sequence ends with `needle`'s sequence.
    pub fn ends_with(&self, needle: &RollingHash) -> bool {
        needle.len() <= self.len() && self.matches(needle, self.len() - needle.len())
    }

    /// The first position at or after `from` where `needle` occurs.
    /// O(n)
    pub fn find(&self, needle: &RollingHash, from: usize) -> Option<usize> {
        let mut pos = from;
        while pos + needle.len() <= self.len() {
            if self.matches(needle, pos) {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    /// The last position where `needle` occurs.
    /// O(n)
    pub fn rfind(&self, needle: &RollingHash) -> Option<usize> {
        if needle.len() > self.len() {
            return None;
        }
        (0..=self.len() - needle.len())
            .rev()
            .find(|&pos| self.matches(needle, pos))
    }

    /// Checks whether `needle` occurs anywhere.
    pub fn contains(&self, needle: &RollingHash) -> bool {
        self.find(needle, 0).is_some()
    }

    /// The number of occurrences of `needle`, counting overlapping ones.
    /// An empty needle occurs zero times.
    pub fn count_overlapping(&self, needle: &RollingHash) -> usize {
        self.count_with_step(needle, 1)
    }

    /// The number of non-overlapping occurrences of `needle`, leftmost
    /// first. An empty needle occurs zero times.
    pub fn count_disjoint(&self, needle: &RollingHash) -> usize {
        self.count_with_step(needle, needle.len())
    }

    fn count_with_step(&self, needle: &RollingHash, step: usize) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut pos = self.find(needle, 0);
        while let Some(at) = pos {
            count += 1;
            pos = self.find(needle, at + step);
        }
        count
    }

    /// The length of the longest suffix of this sequence that is a prefix of
    /// `other`'s sequence. Useful for gluing overlapping fragments.
    pub fn overlap(&self, other: &RollingHash) -> usize {
        (1..=self.len().min(other.len()))
            .rev()
            .find(|&n| self.back(n) == other.front(n))
            .unwrap_or(0)
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-sequence digest equality (same length, same digest).
impl PartialEq for RollingHash {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.digest() == other.digest()
    }
}

impl Eq for RollingHash {}

impl<T: Digest> FromIterator<T> for RollingHash {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T: Digest> Extend<T> for RollingHash {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();
        self.prefix.reserve(lower_bound);

        for elem in iter {
            self.push(&elem);
        }
    }
}
