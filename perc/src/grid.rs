use crate::error::{Axis, Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// 1-based `(row, column)` coordinates of a site.
pub type Site = (usize, usize);

/// Square grid of sites, each either open (`true`) or blocked (`false`).
/// Rows and columns are numbered from 1 to `size` inclusive.
#[derive(Debug, Clone)]
pub struct SiteGrid {
    size: usize,
    data: Vec<bool>,
}

impl SiteGrid {
    /// Creates a `size` by `size` grid with every site blocked.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `size` is zero or the grid would not fit
    /// in memory addressing.
    pub fn new(size: usize) -> Result<Self> {
        let cells = size
            .checked_mul(size)
            .filter(|_| size > 0)
            .ok_or(Error::InvalidArgument {
                name: "grid size",
                value: size,
            })?;

        Ok(Self {
            size,
            data: vec![false; cells],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of sites, `size * size`.
    pub fn cells(&self) -> usize {
        self.data.len()
    }

    /// Fails with `OutOfBounds` unless both coordinates lie in `1..=size`.
    /// The row is checked first.
    pub fn verify(&self, row: usize, col: usize) -> Result<()> {
        for (axis, index) in [(Axis::Row, row), (Axis::Column, col)] {
            if index == 0 || index > self.size {
                return Err(Error::OutOfBounds {
                    axis,
                    index,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// Maps a site to its label in `1..=size*size`; label 0 is left free
    /// for the virtual top node.
    /// The caller must ensure that `row` and `col` are valid.
    pub fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + (col - 1) + 1
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.verify(row, col)?;
        Ok(self.data[self.index(row, col) - 1])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.verify(row, col)?;
        let idx = self.index(row, col) - 1;
        self.data[idx] = value;
        Ok(())
    }

    /// Grid-adjacent sites of `(row, col)` that are open.
    /// The caller must ensure that `row` and `col` are valid.
    pub fn open_neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = Site> + '_ {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc): (isize, isize)| {
                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 1
                    && r <= self.size as isize
                    && c >= 1
                    && c <= self.size as isize
                    && self.data[self.index(r as usize, c as usize) - 1]
                {
                    return Some((r as usize, c as usize));
                }
                None
            })
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            SiteGrid::new(0).unwrap_err(),
            Error::InvalidArgument {
                name: "grid size",
                value: 0
            }
        );
        assert!(SiteGrid::new(usize::MAX).is_err());
    }

    #[test]
    fn index_is_a_bijection() {
        let grid = SiteGrid::new(4).unwrap();
        let mut labels = Vec::new();
        for row in 1..=4 {
            for col in 1..=4 {
                labels.push(grid.index(row, col));
            }
        }
        assert_eq!(labels, (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn verify_checks_row_before_column() {
        let grid = SiteGrid::new(3).unwrap();
        assert!(grid.verify(3, 3).is_ok());
        assert_eq!(
            grid.verify(0, 4).unwrap_err(),
            Error::OutOfBounds {
                axis: Axis::Row,
                index: 0,
                size: 3
            }
        );
        assert_eq!(
            grid.verify(1, 4).unwrap_err(),
            Error::OutOfBounds {
                axis: Axis::Column,
                index: 4,
                size: 3
            }
        );
    }

    #[test]
    fn neighbours_are_open_and_in_bounds() {
        let mut grid = SiteGrid::new(3).unwrap();
        assert_eq!(grid.open_neighbours(2, 2).count(), 0);

        for (row, col) in [(1, 2), (2, 1), (3, 3), (2, 3)] {
            grid.set(row, col, true).unwrap();
        }
        let mut around_centre = grid.open_neighbours(2, 2).collect::<Vec<_>>();
        around_centre.sort();
        assert_eq!(around_centre, vec![(1, 2), (2, 1), (2, 3)]);

        let corner = grid.open_neighbours(1, 1).collect::<Vec<_>>();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&(1, 2)));
        assert!(corner.contains(&(2, 1)));
    }
}
