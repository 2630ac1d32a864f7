use grid_util::point::Point;

use crate::solver::SearchStrategy;
use crate::world::GridWorld;

/// Uniform-Cost Search: expands strictly by accumulated path cost with no
/// guidance toward the goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct UcsSolver;

impl SearchStrategy for UcsSolver {
    /// UCS is uninformed, so the estimate is always zero.
    fn heuristic(&self, _: &GridWorld, _: &Point, _: &Point) -> i32 {
        0
    }
}
