//! Union-find with pluggable merge policies, and a grid percolation model
//! built on top of it.

pub mod disjoint_set;
pub mod error;
pub mod percolation;
pub mod sites;
pub mod tie_break;
pub mod union_find;

pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use percolation::Percolation;
pub use tie_break::{BySize, Root, SentinelDominance, TieBreak};
pub use union_find::{QuickFind, QuickUnion, UnionFind};
