//! # grid_task_sim
//!
//! Simulation core for task-seeking agents on a uniform-cost 2D grid. A
//! [GridWorld] holds static barriers and a registry of numbered task
//! locations; a [TaskSeekingAgent] repeatedly paths to the nearest reachable
//! task using
//! [Uniform-Cost Search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm#Practical_optimizations_and_infinite_graphs)
//! or [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! Manhattan-distance heuristic, then advances one cell per step. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The crate is engine only: rendering, input handling and frame pacing are a
//! driver's concern, wired up through the queries and commands on [GridWorld]
//! and [TaskSeekingAgent].
mod search;

pub mod agent;
pub mod error;
pub mod solver;
pub mod world;

pub use agent::TaskSeekingAgent;
pub use error::{ConfigError, WorldError};
pub use solver::Algorithm;
pub use world::{GridWorld, TaskId};
