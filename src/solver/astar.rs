use grid_util::point::Point;

use crate::solver::{manhattan_distance, SearchStrategy};
use crate::world::GridWorld;

/// A* search guided by the Manhattan distance to the goal.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. At the default 1.0 the estimate stays admissible
    /// and paths are optimal; factors above 1.0 trade path quality for fewer
    /// expansions.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl SearchStrategy for AstarSolver {
    /// The Manhattan distance to the goal times the heuristic factor.
    fn heuristic(&self, _: &GridWorld, cell: &Point, goal: &Point) -> i32 {
        (manhattan_distance(cell, goal) as f32 * self.heuristic_factor) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::UcsSolver;

    #[test]
    fn equal_start_goal() {
        let mut world = GridWorld::new(1, 1);
        world.generate_components();
        let start = Point::new(0, 0);
        let path = AstarSolver::new().find_path(&world, start, start).unwrap();
        assert_eq!(path, vec![start]);
    }

    /// On an open grid the path length must equal the Manhattan distance
    /// plus one.
    #[test]
    fn open_grid_path_is_manhattan_optimal() {
        let mut world = GridWorld::new(6, 4);
        world.generate_components();
        let start = Point::new(0, 0);
        let goal = Point::new(5, 3);
        let path = AstarSolver::new().find_path(&world, start, goal).unwrap();
        assert_eq!(
            path.len() as i32,
            manhattan_distance(&start, &goal) + 1
        );
    }

    #[test]
    fn detours_around_barrier() {
        let mut world = GridWorld::new(3, 3);
        world.set_barrier(Point::new(1, 1));
        world.generate_components();
        let path = AstarSolver::new()
            .find_path(&world, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
    }

    /// With an admissible heuristic A* must match the UCS path length, here
    /// on a grid forcing a long detour.
    #[test]
    fn matches_ucs_length_through_corridor() {
        //  _____
        // |S # G|
        // |  #  |
        // |     |
        //  _____
        let mut world = GridWorld::new(5, 3);
        world.set_barrier(Point::new(2, 0));
        world.set_barrier(Point::new(2, 1));
        world.generate_components();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 0);
        let astar = AstarSolver::new().find_path(&world, start, goal).unwrap();
        let ucs = UcsSolver.find_path(&world, start, goal).unwrap();
        assert_eq!(astar.len(), ucs.len());
    }
}
