//! Self-contained building blocks for competitive programming.
//!
//! Every module is an independent template meant to be dropped into a
//! solution: generic range-query containers ([`SegmentTree`],
//! [`LazySegmentTree`], [`Fenwick`]), disjoint sets ([`UnionFind`],
//! [`RollbackUnionFind`]), a polynomial [`hashing::RollingHash`], a GF(2)
//! [`math::XorBasis`], and modular-arithmetic and combinatorics helpers.
//!
//! The containers don't know anything about your data. Instead, they are
//! generic over small algebraic traits: a [`Monoid`] describes how summaries
//! of adjacent segments combine, and an [`Action`] describes updates that can
//! be applied to a whole segment at once. See [`data`] for the traits and
//! [`data::example_data`] for ready-made instances.
//!
//! The `snippets` feature (on by default) additionally builds the
//! `snippet-pack` tool, which packages a directory tree of snippet sources
//! into a VS Code autocompletion file.

pub mod data;
pub mod hashing;
pub mod math;
#[cfg(feature = "snippets")]
pub mod snippets;
pub mod strings;
pub mod trees;
pub mod union_find;

pub use data::{Action, Commutative, Group, Monoid};
pub use trees::{Fenwick, LazySegmentTree, SegmentTree};
pub use union_find::{RollbackUnionFind, UnionFind};
