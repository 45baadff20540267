//! Common interface over the union-find algorithms in this crate.
//!
//! [`DisjointSet`] is the one to use. [`QuickFind`] and [`QuickUnion`] are the
//! textbook baselines it improves on: quick-find pays linear time per union,
//! quick-union can degrade into a linked list.

use crate::disjoint_set::{allocate, DisjointSet};
use crate::error::{Error, Result};
use crate::tie_break::TieBreak;

pub trait UnionFind {
    /// Merges the sets containing `p` and `q`, returning whether anything changed.
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    fn connected(&mut self, p: usize, q: usize) -> Result<bool>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: TieBreak> UnionFind for DisjointSet<P> {
    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        DisjointSet::union(self, p, q)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        DisjointSet::connected(self, p, q)
    }

    fn len(&self) -> usize {
        DisjointSet::len(self)
    }
}

fn check(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

fn identity(num_elements: usize) -> Result<Vec<usize>> {
    let mut elements = allocate(num_elements)?;
    elements.extend(0..num_elements);
    Ok(elements)
}

/// Every element stores the id of its set; two elements are connected when
/// their ids match.
#[derive(Debug, Clone)]
pub struct QuickFind {
    ids: Vec<usize>,
}

impl QuickFind {
    pub fn new(num_elements: usize) -> Result<Self> {
        Ok(QuickFind {
            ids: identity(num_elements)?,
        })
    }
}

impl UnionFind for QuickFind {
    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        check(p, self.len())?;
        check(q, self.len())?;

        let (p_id, q_id) = (self.ids[p], self.ids[q]);
        if p_id == q_id {
            return Ok(false);
        }
        for id in self.ids.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        Ok(true)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        check(p, self.len())?;
        check(q, self.len())?;
        Ok(self.ids[p] == self.ids[q])
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Parent pointers without weighting or compression.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
}

impl QuickUnion {
    pub fn new(num_elements: usize) -> Result<Self> {
        Ok(QuickUnion {
            parent: identity(num_elements)?,
        })
    }

    fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }
}

impl UnionFind for QuickUnion {
    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        check(p, self.len())?;
        check(q, self.len())?;

        let (root_p, root_q) = (self.root(p), self.root(q));
        if root_p == root_q {
            return Ok(false);
        }
        self.parent[root_p] = root_q;
        Ok(true)
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        check(p, self.len())?;
        check(q, self.len())?;
        Ok(self.root(p) == self.root(q))
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}
