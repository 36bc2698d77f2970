use log::trace;

use crate::{
    error::{Error, Result},
    grid::SiteGrid,
    union_find::UnionFind,
};

////////////////////////////////////////////////////////////////////////////////

/// Label of the virtual node joined to every open site in the first row.
pub const TOP: usize = 0;

/// N-by-N percolation system whose connectivity is updated as sites open.
///
/// Two forests are kept over the same site labels. `perc` also holds the
/// virtual bottom node and answers whether the system percolates. `full`
/// has no bottom node, so a site can only become full through a real path
/// of open sites from the first row. Asking `perc` instead would report
/// sites joined to the bottom row as full as soon as anything percolates
/// (backwash).
#[derive(Debug, Clone)]
pub struct Percolation {
    grid: SiteGrid,
    perc: UnionFind,
    full: UnionFind,
    bottom: usize,
    open_sites: usize,
}

impl Percolation {
    /// Creates an N-by-N grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        let grid = SiteGrid::new(n)?;
        let bottom = grid
            .cells()
            .checked_add(1)
            .filter(|b| *b < usize::MAX)
            .ok_or(Error::InvalidArgument {
                name: "grid size",
                value: n,
            })?;

        Ok(Self {
            perc: UnionFind::new(bottom + 1),
            full: UnionFind::new(bottom),
            grid,
            bottom,
            open_sites: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Label of the virtual node joined to every open site in the last row.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens site `(row, col)` if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        if self.is_open(row, col)? {
            return Ok(());
        }
        self.grid.set(row, col, true)?;
        self.open_sites += 1;

        let index = self.grid.index(row, col);
        if row == 1 {
            self.perc.union(TOP, index);
            self.full.union(TOP, index);
        }
        if row == self.size() {
            self.perc.union(index, self.bottom);
        }

        for (r, c) in self.grid.open_neighbours(row, col) {
            let neighbour = self.grid.index(r, c);
            self.perc.union(neighbour, index);
            self.full.union(neighbour, index);
        }

        trace!("opened site ({row}, {col}), {} open", self.open_sites);
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.get(row, col)
    }

    /// A site is full if it is open and joined to the first row through
    /// open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.is_open(row, col)? && self.full.connected(TOP, self.grid.index(row, col)))
    }

    /// Returns `true` if some path of open sites joins the first and the last
    /// row.
    pub fn percolates(&self) -> bool {
        self.perc.connected(TOP, self.bottom)
    }
}
