/// A candidate root during a merge: its index and the size of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Root {
    pub index: usize,
    pub size: usize,
}

/// Decides which of two distinct roots stays the parent when their trees merge.
///
/// Implementations must return one of the two arguments and must be pure: the
/// same pair of candidates always yields the same survivor.
pub trait TieBreak {
    fn survivor(&self, a: Root, b: Root) -> Root;
}

impl<F> TieBreak for F
where
    F: Fn(Root, Root) -> Root,
{
    fn survivor(&self, a: Root, b: Root) -> Root {
        self(a, b)
    }
}

/// Union by size: the larger tree absorbs the smaller one, `a` wins on a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySize;

impl TieBreak for BySize {
    fn survivor(&self, a: Root, b: Root) -> Root {
        if b.size > a.size {
            b
        } else {
            a
        }
    }
}

/// Keeps two fixed sentinel elements at the root of whatever they join.
///
/// `top` beats everything, `bottom` beats everything except `top`, and any
/// other pair falls back to [`BySize`].
#[derive(Debug, Clone, Copy)]
pub struct SentinelDominance {
    pub top: usize,
    pub bottom: usize,
}

impl TieBreak for SentinelDominance {
    fn survivor(&self, a: Root, b: Root) -> Root {
        for sentinel in [self.top, self.bottom] {
            if a.index == sentinel {
                return a;
            }
            if b.index == sentinel {
                return b;
            }
        }
        BySize.survivor(a, b)
    }
}
