use crate::solver::grid::Grid;
use crate::types::*;

/// One Jacobi sweep of the 5-point Laplace stencil.
///
/// Every interior cell of `next` is set to the mean of its four neighbors in
/// `current`. Only `next`'s interior is written. Returns the maximum absolute
/// change between `current` and `next` over all interior cells.
pub fn sweep(current: &Grid, next: &mut Grid) -> Scalar {
    debug_assert!(current.dim == next.dim, "Wrong dimensions.");

    let mut max_delta: Scalar = 0.0;

    for idx in current.iter_index_inside() {
        let nbs = Grid::get_neighbors_indices(idx);

        // Order: below, above, left, right.
        let t = 0.25
            * (current[nbs[1][1]] + current[nbs[0][1]] + current[nbs[0][0]] + current[nbs[1][0]]);

        let delta = t - current[idx];
        next[idx] = t;

        if max_delta < delta.abs() {
            max_delta = delta.abs();
        }
    }

    return max_delta;
}

/// Strict convergence test: `max_delta < epsilon`.
pub fn converged(max_delta: Scalar, epsilon: Scalar) -> bool {
    return max_delta < epsilon;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::boundary::BoundaryCondition;

    #[test]
    fn check_first_sweep() {
        let current = BoundaryCondition::default().initialize(3);
        let mut next = current.clone();

        let max_delta = sweep(&current, &mut next);

        assert!(max_delta == 0.25, "Max delta {}", max_delta);
        for idx in next.iter_index_inside() {
            let expected = if idx.y == 1 { 0.25 } else { 0.0 };
            assert!(next[idx] == expected, "Wrong value at {:?}: {}", idx, next[idx]);
        }

        // Source is never written.
        assert!(current == BoundaryCondition::default().initialize(3));
    }

    #[test]
    fn check_no_in_place_update() {
        // A Gauss-Seidel update would already propagate heat into row 2.
        let current = BoundaryCondition::default().initialize(4);
        let mut next = current.clone();
        sweep(&current, &mut next);

        for x in 1..5 {
            assert!(next[idx!(x, 2)] == 0.0);
        }
    }

    #[test]
    fn check_converged() {
        assert!(converged(0.5e-4, 1e-4));
        assert!(!converged(1e-4, 1e-4));
        assert!(!converged(0.0, 0.0));
        assert!(!converged(Scalar::NAN, 1e-4));
    }
}
