use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::tie_break::SentinelDominance;

/// A `side x side` grid of sites, each either open or blocked.
///
/// Sites are stored row-major in a [`DisjointSet`], followed by two virtual
/// sentinels: `top` is joined to every site of row 0 and `bottom` to every site
/// of the last row. The system percolates once the two sentinels share a set.
#[derive(Debug, Clone)]
pub struct Percolation {
    sites: DisjointSet<SentinelDominance>,
    side: usize,
    open_sites: usize,
    top: usize,
    bottom: usize,
}

impl Percolation {
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(Error::InvalidDimension {
                reason: "side must be positive".to_string(),
            });
        }
        let too_large = || Error::InvalidDimension {
            reason: format!("a {side}x{side} grid does not fit in memory"),
        };
        let site_count = side
            .checked_mul(side)
            .filter(|n| n.checked_add(2).is_some())
            .ok_or_else(too_large)?;

        let top = site_count;
        let bottom = site_count + 1;
        let mut sites = DisjointSet::with_policy(site_count + 2, SentinelDominance { top, bottom })
            .map_err(|_| too_large())?;

        let last_row = (side - 1) * side;
        for col in 0..side {
            sites.union(top, col)?;
            sites.union(bottom, last_row + col)?;
        }
        log::debug!("created {side}x{side} percolation grid");

        Ok(Percolation {
            sites,
            side,
            open_sites: 0,
            top,
            bottom,
        })
    }

    /// Builds a grid from its total number of sites, which must be a perfect square.
    pub fn from_site_count(site_count: usize) -> Result<Self> {
        match exact_sqrt(site_count) {
            Some(side) if side > 0 => Self::new(side),
            _ => Err(Error::InvalidDimension {
                reason: format!("{site_count} is not a positive perfect square"),
            }),
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn site_count(&self) -> usize {
        self.side * self.side
    }

    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.side && col < self.side {
            Ok(row * self.side + col)
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                side: self.side,
            })
        }
    }

    /// Opens a site and joins it with its open neighbours. Opening an open site
    /// does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index_of(row, col)?;
        if self.sites.flag(site)? {
            return Ok(());
        }

        self.sites.set_flag(site, true)?;
        self.open_sites += 1;
        for neighbor in neighbors(self.side, row, col) {
            if self.sites.flag(neighbor)? {
                self.sites.union(site, neighbor)?;
            }
        }
        log::trace!("opened ({row}, {col}), {} open sites", self.open_sites);

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index_of(row, col)?;
        self.sites.flag(site)
    }

    /// Whether the site is connected to the top row.
    ///
    /// This is a pure connectivity query: a blocked site is never joined to
    /// anything except through the row 0 sentinel, so blocked sites outside the
    /// top row are never full.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.index_of(row, col)?;
        self.sites.connected(site, self.top)
    }

    pub fn percolates(&mut self) -> bool {
        // both sentinels are in range by construction
        self.sites.root(self.top) == self.sites.root(self.bottom)
    }

    pub fn open_site_count(&self) -> usize {
        self.open_sites
    }
}

/// Row-major indices of the in-grid sites above, below, left and right of `(row, col)`.
fn neighbors(side: usize, row: usize, col: usize) -> impl Iterator<Item = usize> {
    [
        (row.checked_sub(1), Some(col)),
        (Some(row + 1).filter(|&r| r < side), Some(col)),
        (Some(row), col.checked_sub(1)),
        (Some(row), Some(col + 1).filter(|&c| c < side)),
    ]
    .into_iter()
    .filter_map(move |(r, c)| Some(r? * side + c?))
}

fn exact_sqrt(n: usize) -> Option<usize> {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).is_none_or(|square| square > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|square| square <= n) {
        root += 1;
    }
    (root * root == n).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(side: usize, open: &[(usize, usize)]) -> Percolation {
        let mut percolation = Percolation::new(side).unwrap();
        for &(row, col) in open {
            percolation.open(row, col).unwrap();
        }
        percolation
    }

    #[test]
    fn test_open_sites_are_open() {
        let percolation = grid(10, &[(9, 5), (1, 2), (1, 5)]);
        assert!(percolation.is_open(9, 5).unwrap());
        assert!(percolation.is_open(1, 2).unwrap());
        assert!(percolation.is_open(1, 5).unwrap());
        assert!(!percolation.is_open(1, 4).unwrap());
    }

    #[test]
    fn test_full_sites() {
        let mut percolation = grid(4, &[(0, 1), (1, 1), (2, 1), (2, 2)]);
        assert!(percolation.is_full(2, 2).unwrap());
        assert!(!percolation.is_full(2, 3).unwrap());
        assert!(percolation.is_full(1, 1).unwrap());
        assert!(!percolation.is_full(2, 3).unwrap());
        assert!(!percolation.percolates());
    }

    #[test]
    fn test_percolates() {
        let mut percolation = grid(4, &[(0, 1), (1, 1), (2, 1), (2, 2), (2, 3), (3, 3)]);
        assert!(percolation.percolates());
        assert_eq!(percolation.open_site_count(), 6);
    }

    #[test]
    fn test_broken_chain_does_not_percolate() {
        let mut percolation = grid(4, &[(0, 1), (2, 1), (2, 2), (2, 3), (3, 3)]);
        assert!(!percolation.percolates());
        assert_eq!(percolation.open_site_count(), 5);
        assert!(!percolation.is_full(3, 3).unwrap());

        percolation.open(1, 1).unwrap();
        assert!(percolation.percolates());
        assert!(percolation.is_full(3, 3).unwrap());
    }

    #[test]
    fn test_open_is_idempotent_and_counts_monotonically() {
        let mut percolation = Percolation::new(3).unwrap();
        let mut previous = percolation.open_site_count();
        for (row, col) in [(0, 0), (1, 1), (0, 0), (2, 2), (1, 1)] {
            let was_open = percolation.is_open(row, col).unwrap();
            percolation.open(row, col).unwrap();
            let count = percolation.open_site_count();
            assert_eq!(count, previous + usize::from(!was_open));
            assert!(percolation.is_open(row, col).unwrap());
            previous = count;
        }
        assert_eq!(percolation.open_site_count(), 3);
    }

    #[test]
    fn test_closed_site_is_not_full() {
        let mut percolation = grid(3, &[(0, 0), (1, 0)]);
        assert!(!percolation.is_full(1, 1).unwrap());
        assert!(!percolation.is_full(2, 0).unwrap());
        // top row sites share the top sentinel's set before being opened
        assert!(percolation.is_full(0, 2).unwrap());
    }

    #[test]
    fn test_backwash_through_bottom_row() {
        let mut percolation = grid(3, &[(0, 0), (1, 0)]);
        assert!(!percolation.is_full(2, 2).unwrap());

        percolation.open(2, 0).unwrap();
        assert!(percolation.percolates());
        // blocked, but shares the bottom sentinel's set
        assert!(!percolation.is_open(2, 2).unwrap());
        assert!(percolation.is_full(2, 2).unwrap());
        assert!(!percolation.is_full(1, 2).unwrap());
    }

    #[test]
    fn test_sentinels_stay_roots() {
        let mut percolation = grid(5, &[(2, 2), (2, 3), (1, 2), (0, 2), (3, 3), (4, 3)]);
        let (top, bottom) = (percolation.top, percolation.bottom);
        assert!(percolation.percolates());
        for site in 0..percolation.site_count() {
            let root = percolation.sites.find_root(site).unwrap();
            assert!(root == top || !percolation.sites.connected(site, top).unwrap());
        }
        assert_eq!(percolation.sites.find_root(bottom).unwrap(), top);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut percolation = Percolation::new(4).unwrap();
        assert!(matches!(
            percolation.open(4, 0),
            Err(Error::OutOfBounds {
                row: 4,
                col: 0,
                side: 4
            })
        ));
        assert!(percolation.open(0, 4).is_err());
        assert!(percolation.is_open(7, 7).is_err());
        assert!(percolation.is_full(0, 9).is_err());
        assert!(percolation.index_of(4, 4).is_err());
        assert_eq!(percolation.index_of(3, 2).unwrap(), 14);
        assert_eq!(percolation.open_site_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Percolation::new(0),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(Percolation::new(usize::MAX).is_err());
        assert!(Percolation::from_site_count(0).is_err());
        assert!(Percolation::from_site_count(15).is_err());
        assert!(Percolation::from_site_count(usize::MAX).is_err());
        assert_eq!(Percolation::from_site_count(16).unwrap().side(), 4);
        assert_eq!(Percolation::from_site_count(1).unwrap().side(), 1);
    }

    #[test]
    fn test_unallocatable_grid_is_rejected() {
        // side*side + 2 fits in usize, but the forest would not fit in memory
        let side = 1usize << (usize::BITS / 2 - 1);
        assert!(matches!(
            Percolation::new(side),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Percolation::from_site_count(side * side),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_single_site_grid() {
        // one site is both the top and the bottom row
        let mut percolation = Percolation::new(1).unwrap();
        assert!(percolation.percolates());
        percolation.open(0, 0).unwrap();
        assert!(percolation.is_full(0, 0).unwrap());
        assert_eq!(percolation.open_site_count(), 1);
    }

    #[test]
    fn test_neighbors() {
        let mut corner: Vec<usize> = neighbors(3, 0, 0).collect();
        corner.sort();
        assert_eq!(corner, vec![1, 3]);

        let mut center: Vec<usize> = neighbors(3, 1, 1).collect();
        center.sort();
        assert_eq!(center, vec![1, 3, 5, 7]);

        let mut edge: Vec<usize> = neighbors(3, 2, 1).collect();
        edge.sort();
        assert_eq!(edge, vec![4, 6, 8]);
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(49), Some(7));
        assert_eq!(exact_sqrt(50), None);
        assert_eq!(exact_sqrt(usize::MAX), None);
    }
}
