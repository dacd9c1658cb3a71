//! Naive reference models and random operation generators shared by the
//! integration and property tests.

use quiver::data::example_data::{AffineAction, Sum};
use quiver::{Fenwick, LazySegmentTree, SegmentTree};
use rand::Rng;
use std::ops::Range;

/// Something to perform in one round of tests.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RoundAction {
    Act {
        range: Range<usize>,
        action: AffineAction,
    },
    Query {
        range: Range<usize>,
    },
    Set {
        index: usize,
        value: i64,
    },
    Update {
        index: usize,
        extra: i64,
    },
}

pub const MAX_ADD: i64 = 200;

pub fn random_range(rng: &mut impl Rng, len: usize) -> Range<usize> {
    let a = rng.gen_range(0..=len);
    let b = rng.gen_range(0..=len);
    if a <= b {
        a..b
    } else {
        b..a
    }
}

pub fn random_affine(rng: &mut impl Rng) -> AffineAction {
    AffineAction {
        // Factors beyond ±1 blow the values up exponentially over the rounds.
        mul: if rng.gen() { 1 } else { -1 },
        add: rng.gen_range(-MAX_ADD..=MAX_ADD),
    }
}

/// A random round; `with_act` turns range updates on for the containers that
/// support them.
pub fn random_round_action(rng: &mut impl Rng, len: usize, with_act: bool) -> RoundAction {
    match rng.gen_range(0..if with_act { 4 } else { 3 }) {
        // query a segment
        0 => RoundAction::Query {
            range: random_range(rng, len),
        },
        // overwrite a value
        1 => RoundAction::Set {
            index: rng.gen_range(0..len),
            value: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        // add to a value
        2 => RoundAction::Update {
            index: rng.gen_range(0..len),
            extra: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        // act on a segment
        3 => RoundAction::Act {
            range: random_range(rng, len),
            action: random_affine(rng),
        },
        _ => panic!(),
    }
}

/// The reference implementation everything is checked against: a plain
/// vector that does every operation in O(n).
#[derive(Clone, Debug)]
pub struct NaiveModel {
    pub values: Vec<i64>,
}

impl NaiveModel {
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Performs a round. Queries return their answer, everything else `None`.
    pub fn apply(&mut self, action: &RoundAction) -> Option<i64> {
        match action {
            RoundAction::Act { range, action } => {
                for value in &mut self.values[range.clone()] {
                    *value = action.mul * *value + action.add;
                }
                None
            }
            RoundAction::Query { range } => {
                Some(self.values[range.clone()].iter().sum())
            }
            RoundAction::Set { index, value } => {
                self.values[*index] = *value;
                None
            }
            RoundAction::Update { index, extra } => {
                self.values[*index] += extra;
                None
            }
        }
    }
}

pub fn apply_to_lazy(tree: &mut LazySegmentTree<AffineAction>, action: &RoundAction) -> Option<i64> {
    match action {
        RoundAction::Act { range, action } => {
            tree.apply(range.clone(), *action);
            None
        }
        RoundAction::Query { range } => Some(tree.summary(range.clone()).0),
        RoundAction::Set { index, value } => {
            tree.set(*index, Sum(*value));
            None
        }
        RoundAction::Update { index, extra } => {
            let extra = *extra;
            tree.for_each_mut(*index..*index + 1, |node| {
                node.0 += extra;
                true
            });
            None
        }
    }
}

/// The plain segment tree doesn't do range updates; rounds must be generated
/// with `with_act == false`.
pub fn apply_to_segment(tree: &mut SegmentTree<Sum<i64>>, action: &RoundAction) -> Option<i64> {
    match action {
        RoundAction::Act { .. } => panic!("plain segment trees don't support range updates"),
        RoundAction::Query { range } => Some(tree.summary(range.clone()).0),
        RoundAction::Set { index, value } => {
            tree.set(*index, Sum(*value));
            None
        }
        RoundAction::Update { index, extra } => {
            tree.update(*index, Sum(*extra));
            None
        }
    }
}

pub fn apply_to_fenwick(fenwick: &mut Fenwick<Sum<i64>>, action: &RoundAction) -> Option<i64> {
    match action {
        RoundAction::Act { .. } => panic!("fenwick trees don't support range updates"),
        RoundAction::Query { range } => Some(fenwick.summary(range.clone()).0),
        RoundAction::Set { index, value } => {
            fenwick.set(*index, Sum(*value));
            None
        }
        RoundAction::Update { index, extra } => {
            fenwick.add(*index, Sum(*extra));
            None
        }
    }
}

/// Naive disjoint sets: every element carries its set's label, unions
/// relabel in O(n).
#[derive(Clone, Debug)]
pub struct NaiveDsu {
    labels: Vec<usize>,
}

impl NaiveDsu {
    pub fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (from, to) = (self.labels[v], self.labels[u]);
        if from == to {
            return false;
        }
        for label in &mut self.labels {
            if *label == from {
                *label = to;
            }
        }
        true
    }

    pub fn connected(&self, u: usize, v: usize) -> bool {
        self.labels[u] == self.labels[v]
    }

    pub fn component_size(&self, u: usize) -> usize {
        let label = self.labels[u];
        self.labels.iter().filter(|&&l| l == label).count()
    }

    pub fn count(&self) -> usize {
        let mut labels: Vec<usize> = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}
