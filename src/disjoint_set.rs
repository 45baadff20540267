use hashbrown::HashMap;

use crate::error::{Error, Result};
use crate::tie_break::{BySize, Root, TieBreak};

/// Disjoint set forest over a fixed universe of elements
/// - fixed size, indices `0..len`
/// - path halving on every root lookup
/// - merge direction chosen by a pluggable [`TieBreak`] policy
/// - one auxiliary boolean flag per element, ignored by the algorithm itself
#[derive(Debug, Clone)]
pub struct DisjointSet<P: TieBreak = BySize> {
    parent: Vec<usize>,
    // only meaningful at root indices
    size: Vec<usize>,
    flag: Vec<bool>,
    set_count: usize,
    policy: P,
}

impl DisjointSet {
    pub fn new(num_elements: usize) -> Result<Self> {
        Self::with_policy(num_elements, BySize)
    }
}

impl<P: TieBreak> DisjointSet<P> {
    pub fn with_policy(num_elements: usize, policy: P) -> Result<Self> {
        let mut parent = allocate(num_elements)?;
        let mut size = allocate(num_elements)?;
        let mut flag = allocate(num_elements)?;
        parent.extend(0..num_elements);
        size.resize(num_elements, 1);
        flag.resize(num_elements, false);

        Ok(DisjointSet {
            parent,
            size,
            flag,
            set_count: num_elements,
            policy,
        })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false, construction rejects an empty universe.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: x,
                len: self.len(),
            })
        }
    }

    // Caller guarantees `x` is in range.
    pub(crate) fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    pub fn find_root(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if they were
    /// already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return Ok(false);
        }

        let a = Root {
            index: root_x,
            size: self.size[root_x],
        };
        let b = Root {
            index: root_y,
            size: self.size[root_y],
        };
        let (winner, loser) = if self.policy.survivor(a, b).index == root_y {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.set_count -= 1;
        log::trace!(
            "merged root {} into {} (size {})",
            loser,
            winner,
            self.size[winner]
        );

        Ok(true)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Number of elements in the set containing `x`.
    pub fn size_of(&mut self, x: usize) -> Result<usize> {
        let root = self.find_root(x)?;
        Ok(self.size[root])
    }

    pub fn flag(&self, x: usize) -> Result<bool> {
        self.check(x)?;
        Ok(self.flag[x])
    }

    pub fn set_flag(&mut self, x: usize, value: bool) -> Result<()> {
        self.check(x)?;
        self.flag[x] = value;
        Ok(())
    }

    /// Points every element directly at its root.
    pub fn compress(&mut self) {
        for x in 0..self.len() {
            let root = self.root(x);
            self.parent[x] = root;
        }
    }

    /// Groups every element by the root of its set.
    pub fn components(&mut self) -> HashMap<usize, Vec<usize>> {
        // root -> members
        let mut components: HashMap<usize, Vec<usize>> = HashMap::new();
        for x in 0..self.len() {
            let root = self.root(x);
            components.entry(root).or_default().push(x);
        }
        components
    }
}

/// Empty vector with room for `len` elements, or `InvalidSize` when `len` is
/// zero or the allocation cannot be made.
pub(crate) fn allocate<T>(len: usize) -> Result<Vec<T>> {
    if len == 0 {
        return Err(Error::InvalidSize(len));
    }
    let mut elements = Vec::new();
    elements
        .try_reserve_exact(len)
        .map_err(|_| Error::InvalidSize(len))?;
    Ok(elements)
}
