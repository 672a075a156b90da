use crate::solver::grid::Grid;
use crate::types::*;
use clap::ValueEnum;

/// The edge of the solid which is held at a fixed temperature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// One heated edge, everything else on the boundary is held at `0.0`.
/// The four corner cells always stay at `0.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryCondition {
    pub edge: Edge,
    pub temperature: Scalar,
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        return BoundaryCondition {
            edge: Edge::Top,
            temperature: 1.0,
        };
    }
}

impl BoundaryCondition {
    pub fn new(edge: Edge, temperature: Scalar) -> Self {
        return BoundaryCondition { edge, temperature };
    }

    /// Indices of the heated cells, corners excluded.
    pub fn heated_indices(&self, dim: Dimension2) -> impl Iterator<Item = Index2> {
        let edge = self.edge;
        let last = dim - idx!(1, 1);

        let range = match edge {
            Edge::Top | Edge::Bottom => 1..last.x,
            Edge::Left | Edge::Right => 1..last.y,
        };

        return range.map(move |k| match edge {
            Edge::Top => idx!(k, 0),
            Edge::Bottom => idx!(k, last.y),
            Edge::Left => idx!(0, k),
            Edge::Right => idx!(last.x, k),
        });
    }

    /// Resets the whole boundary of `grid` to this condition.
    /// Interior cells are left untouched.
    pub fn apply(&self, grid: &mut Grid) {
        let boundary: Vec<Index2> = grid.iter_index_boundary().collect();
        for idx in boundary {
            grid[idx] = 0.0;
        }

        for idx in self.heated_indices(grid.dim) {
            grid[idx] = self.temperature;
        }
    }

    /// Allocates a grid with `n x n` interior cells at `0.0` and this boundary.
    pub fn initialize(&self, n: usize) -> Grid {
        let mut grid = Grid::new(n);
        self.apply(&mut grid);
        return grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_top_edge_without_corners() {
        let grid = BoundaryCondition::default().initialize(4);

        for idx in grid.iter_index() {
            let expected = if idx.y == 0 && idx.x >= 1 && idx.x <= 4 {
                1.0
            } else {
                0.0
            };
            assert!(grid[idx] == expected, "Wrong value at {:?}: {}", idx, grid[idx]);
        }
    }

    #[test]
    fn check_other_edges() {
        for (edge, expected) in [
            (Edge::Bottom, vec![idx!(1, 3), idx!(2, 3)]),
            (Edge::Left, vec![idx!(0, 1), idx!(0, 2)]),
            (Edge::Right, vec![idx!(3, 1), idx!(3, 2)]),
        ] {
            let bc = BoundaryCondition::new(edge, 2.5);
            let heated: Vec<Index2> = bc.heated_indices(dim!(4, 4)).collect();
            assert!(heated == expected, "Edge {:?}: {:?}", edge, heated);

            let grid = bc.initialize(2);
            let sum: Scalar = grid.as_slice().iter().sum();
            assert!(sum == 5.0, "Edge {:?}: sum {}", edge, sum);
        }
    }
}
