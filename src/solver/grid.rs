use crate::log::{info, Logger};
use crate::types::*;
use itertools::{Itertools, MinMaxResult};
use std::num::Wrapping;
use std::ops::{Index, IndexMut};

/// Temperature field of `n x n` interior cells surrounded by a
/// one cell wide boundary (halo).
///
/// Cells are stored row by row, `x` is the column and `y` the row.
/// Row `0` is the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Dimension including the boundary: `(n + 2, n + 2)`.
    pub dim: Dimension2,

    cells: Vec<Scalar>,
}

/// Statistics over the interior cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub min: Scalar,
    pub max: Scalar,
    pub mean: Scalar,
}

type GridIndex = Index2;

pub struct GridIndexIterator {
    curr: GridIndex,

    min: Index2,
    max: Index2,
}

impl GridIndexIterator {
    pub fn new(dim: Index2) -> GridIndexIterator {
        return GridIndexIterator::with_range(idx!(0, 0), dim);
    }

    /// Iterates `[min, max)` in both directions, row by row.
    pub fn with_range(min: Index2, max: Index2) -> GridIndexIterator {
        return GridIndexIterator {
            curr: min,
            min,
            max,
        };
    }
}

impl Iterator for GridIndexIterator {
    type Item = GridIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr; // Copy current.

        if !Grid::is_inside_range(self.min, self.max, curr) {
            return None;
        }

        // Advance to next cell.
        let next = &mut self.curr;
        next.x += 1;
        if next.x >= self.max.x {
            next.y += 1;
            next.x = self.min.x;
        }

        return Some(curr);
    }
}

impl Grid {
    /// Allocates a zeroed grid with `n x n` interior cells.
    pub fn new(n: usize) -> Self {
        let dim = dim!(n + 2, n + 2);

        return Grid {
            dim,
            cells: vec![0.0; dim.x * dim.y],
        };
    }

    /// Number of interior cells per dimension.
    pub fn interior_size(&self) -> usize {
        return self.dim.x - 2;
    }

    pub fn iter_index(&self) -> GridIndexIterator {
        return GridIndexIterator::new(self.dim);
    }

    pub fn iter_index_inside(&self) -> GridIndexIterator {
        return GridIndexIterator::with_range(idx!(1, 1), self.dim - idx!(1, 1));
    }

    pub fn iter_index_boundary(&self) -> impl Iterator<Item = Index2> + '_ {
        return self.iter_index().filter(|idx| self.is_boundary(*idx));
    }

    pub fn is_inside_range(min: Index2, max: Index2, index: Index2) -> bool {
        return index.x >= min.x && index.y >= min.y && index.x < max.x && index.y < max.y;
    }

    pub fn is_inside_border(&self, index: Index2) -> bool {
        return Grid::is_inside_range(idx!(1, 1), self.dim - idx!(1, 1), index);
    }

    pub fn is_boundary(&self, index: Index2) -> bool {
        return Grid::is_inside_range(Index2::zeros(), self.dim, index)
            && !self.is_inside_border(index);
    }

    pub fn get_neighbors_indices(index: Index2) -> [[Index2; 2]; 2] {
        let decrement = |x| (Wrapping(x) - Wrapping(1usize)).0;

        return [
            [
                // Negative neighbors.
                Index2::new(decrement(index.x), index.y),
                Index2::new(index.x, decrement(index.y)),
            ],
            [
                // Positive neighbors.
                Index2::new(index.x + 1, index.y),
                Index2::new(index.x, index.y + 1),
            ],
        ];
    }

    fn offset(&self, index: Index2) -> usize {
        return index.x + index.y * self.dim.x;
    }

    pub fn cell(&self, index: Index2) -> Scalar {
        return self.cells[self.offset(index)];
    }

    pub fn cell_mut(&mut self, index: Index2) -> &mut Scalar {
        let offset = self.offset(index);
        return &mut self.cells[offset];
    }

    pub fn as_slice(&self) -> &[Scalar] {
        return &self.cells;
    }

    /// All rows from top to bottom, boundary included.
    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        return self.cells.chunks_exact(self.dim.x);
    }

    /// Bitwise comparison of the boundary cells of two equally sized grids.
    pub fn boundary_equals(&self, other: &Grid) -> bool {
        return self.dim == other.dim
            && self
                .iter_index_boundary()
                .all(|idx| self.cell(idx).to_bits() == other.cell(idx).to_bits());
    }

    pub fn stats(&self) -> Stats {
        let count = self.interior_size() * self.interior_size();
        let values = || self.iter_index_inside().map(|idx| self.cell(idx));

        let (min, max) = match values().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        return Stats {
            min,
            max,
            mean: values().sum::<Scalar>() / count as Scalar,
        };
    }

    pub fn log_stats(&self, log: &Logger) {
        let stats = self.stats();
        info!(
            log,
            "Temperature range: {:.6?}, {:.6?}, mean: {:.6?}", stats.min, stats.max, stats.mean
        );
    }
}

impl Index<Index2> for Grid {
    type Output = Scalar;

    fn index(&self, index: Index2) -> &Scalar {
        return &self.cells[self.offset(index)];
    }
}

impl IndexMut<Index2> for Grid {
    fn index_mut(&mut self, index: Index2) -> &mut Scalar {
        return self.cell_mut(index);
    }
}
