use std::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use log::debug;

use crate::error::ConfigError;
use crate::search::best_first_search;
use crate::world::GridWorld;

pub mod astar;
pub mod ucs;

pub use astar::AstarSolver;
pub use ucs::UcsSolver;

/// Manhattan distance between two cells: `|dx| + |dy|`. On a 4-connected grid
/// with unit move costs this is an admissible and consistent lower bound on
/// the remaining path cost.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// A least-cost-first search strategy over a [GridWorld]. Implementors only
/// supply the heuristic; the search itself is shared and differs between
/// strategies solely in how it estimates remaining cost.
pub trait SearchStrategy {
    /// Lower-bound estimate of the remaining cost from `cell` to `goal`.
    fn heuristic(&self, world: &GridWorld, cell: &Point, goal: &Point) -> i32;

    /// Computes a minimum-cost path from start to goal, both inclusive, under
    /// unit move costs, or [None] if the goal is unreachable given the
    /// world's barriers. Pure function of the world state at call time; no
    /// search state persists between calls.
    fn find_path(&self, world: &GridWorld, start: Point, goal: Point) -> Option<Vec<Point>> {
        // Check if start and goal are on the same connected component before
        // flood-filling a frontier for nothing.
        if world.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return None;
        }
        best_first_search(
            &start,
            |node| {
                world
                    .neighbors(*node)
                    .into_iter()
                    .map(|p| (p, 1))
                    .collect::<Vec<_>>()
            },
            |cell| self.heuristic(world, cell, &goal),
            |cell| *cell == goal,
        )
        .map(|(path, _cost)| path)
    }
}

/// Selector for the supported search strategies, typically parsed from driver
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Uniform-Cost Search, uninformed.
    Ucs,
    /// A* guided by the Manhattan-distance heuristic.
    Astar,
}

impl Algorithm {
    /// Runs the matching strategy on the given query.
    pub fn find_path(&self, world: &GridWorld, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self {
            Algorithm::Ucs => UcsSolver.find_path(world, start, goal),
            Algorithm::Astar => AstarSolver::new().find_path(world, start, goal),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the canonical spellings `"UCS"` and `"A*"` (or `"ASTAR"`),
    /// case-insensitively. Anything else is a configuration error, fatal to
    /// the call and never retried.
    fn from_str(s: &str) -> Result<Algorithm, ConfigError> {
        match s.to_ascii_uppercase().as_str() {
            "UCS" => Ok(Algorithm::Ucs),
            "A*" | "ASTAR" => Ok(Algorithm::Astar),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Ucs => write!(f, "UCS"),
            Algorithm::Astar => write!(f, "A*"),
        }
    }
}
