use std::collections::VecDeque;

use grid_util::point::Point;
use log::{debug, info};

use crate::solver::Algorithm;
use crate::world::{GridWorld, TaskId};

/// An agent that repeatedly finds the nearest reachable task in its world and
/// walks to it one cell per step. Each agent owns an independent [GridWorld]
/// clone, so claiming a task never removes it from another agent's pool;
/// isolation is by copy, not by locking.
#[derive(Clone, Debug)]
pub struct TaskSeekingAgent {
    world: GridWorld,
    algorithm: Algorithm,
    start: Point,
    position: Point,
    pending_path: VecDeque<Point>,
    total_cost: u32,
    completed_tasks: Vec<(TaskId, u32)>,
    moving: bool,
}

impl TaskSeekingAgent {
    pub fn new(world: GridWorld, start: Point, algorithm: Algorithm) -> TaskSeekingAgent {
        TaskSeekingAgent {
            world,
            algorithm,
            start,
            position: start,
            pending_path: VecDeque::new(),
            total_cost: 0,
            completed_tasks: Vec::new(),
            moving: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// [true] while a committed path still has queued motion. Cleared by the
    /// [advance](Self::advance) call that finds the path exhausted.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Number of moves made so far.
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Claimed tasks in completion order, each with the total cost at the
    /// moment it was reached.
    pub fn completed_tasks(&self) -> &[(TaskId, u32)] {
        &self.completed_tasks
    }

    pub fn completed_count(&self) -> usize {
        self.completed_tasks.len()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Paths to every outstanding task with the configured algorithm and
    /// commits to the shortest result, queueing its cells (current position
    /// excluded) for traversal. Tasks are evaluated in task-registry
    /// iteration order and only a strictly shorter path displaces the current
    /// best, so the earliest-enumerated of equal-nearest tasks wins. Returns
    /// [false] without touching any state when no task is reachable, which is
    /// the normal terminal condition of a run, not an error.
    pub fn select_nearest_task(&mut self) -> bool {
        let mut shortest: Option<Vec<Point>> = None;
        for task_cell in self.world.tasks().keys() {
            if let Some(path) = self.algorithm.find_path(&self.world, self.position, *task_cell) {
                if shortest.as_ref().map_or(true, |best| path.len() < best.len()) {
                    shortest = Some(path);
                }
            }
        }
        match shortest {
            Some(path) => {
                debug!(
                    "Agent at {} targets {} at distance {}",
                    self.position,
                    path[path.len() - 1],
                    path.len() - 1
                );
                self.pending_path = path.into_iter().skip(1).collect();
                self.moving = true;
                true
            }
            None => false,
        }
    }

    /// Advances one cell along the committed path and claims any task at the
    /// new position, recording its id with the accumulated cost. A call with
    /// nothing queued clears the moving flag instead, signalling the driver
    /// to request a new target or consider the agent done.
    pub fn advance(&mut self) {
        if let Some(next) = self.pending_path.pop_front() {
            self.position = next;
            self.total_cost += 1;
            if let Some(task) = self.world.claim_task_at(self.position) {
                info!(
                    "Agent completed task {} at {} with cost {}",
                    task, self.position, self.total_cost
                );
                self.completed_tasks.push((task, self.total_cost));
            }
        } else {
            self.moving = false;
        }
    }

    /// Rebinds the agent to a fresh world clone and resets all progress,
    /// ready for a new run or algorithm-comparison pass.
    pub fn reset_to(&mut self, world: GridWorld) {
        self.world = world;
        self.position = self.start;
        self.pending_path.clear();
        self.total_cost = 0;
        self.completed_tasks.clear();
        self.moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_world(columns: usize, rows: usize) -> GridWorld {
        let mut world = GridWorld::new(columns, rows);
        world.generate_components();
        world
    }

    #[test]
    fn idle_until_target_selected() {
        let mut world = open_world(4, 4);
        world.add_task(Point::new(2, 0));
        let mut agent = TaskSeekingAgent::new(world, Point::new(0, 0), Algorithm::Ucs);
        assert!(!agent.is_moving());
        assert!(agent.select_nearest_task());
        assert!(agent.is_moving());
    }

    #[test]
    fn walks_to_adjacent_task() {
        let mut world = open_world(3, 3);
        let id = world.add_task(Point::new(1, 0));
        let mut agent = TaskSeekingAgent::new(world, Point::new(0, 0), Algorithm::Astar);
        assert!(agent.select_nearest_task());
        agent.advance();
        assert_eq!(agent.position(), Point::new(1, 0));
        assert_eq!(agent.total_cost(), 1);
        assert_eq!(agent.completed_tasks(), &[(id, 1)]);
        // The path is exhausted; the next advance only clears the flag.
        assert!(agent.is_moving());
        agent.advance();
        assert!(!agent.is_moving());
    }

    #[test]
    fn nearest_of_two_tasks_wins() {
        let mut world = open_world(6, 1);
        world.add_task(Point::new(5, 0));
        let near = world.add_task(Point::new(2, 0));
        let mut agent = TaskSeekingAgent::new(world, Point::new(0, 0), Algorithm::Ucs);
        assert!(agent.select_nearest_task());
        agent.advance();
        agent.advance();
        assert_eq!(agent.completed_tasks(), &[(near, 2)]);
    }

    #[test]
    fn unreachable_only_task_leaves_agent_idle() {
        let mut world = GridWorld::new(5, 5);
        world.add_task(Point::new(2, 2));
        for barrier in [
            Point::new(2, 1),
            Point::new(2, 3),
            Point::new(1, 2),
            Point::new(3, 2),
        ] {
            world.set_barrier(barrier);
        }
        world.generate_components();
        let mut agent = TaskSeekingAgent::new(world, Point::new(0, 0), Algorithm::Astar);
        assert!(!agent.select_nearest_task());
        assert!(!agent.is_moving());
        assert_eq!(agent.total_cost(), 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut world = open_world(4, 4);
        world.add_task(Point::new(3, 0));
        let fresh = world.clone();
        let mut agent = TaskSeekingAgent::new(world, Point::new(0, 0), Algorithm::Ucs);
        agent.select_nearest_task();
        agent.advance();
        agent.advance();
        agent.advance();
        assert_eq!(agent.completed_count(), 1);
        agent.reset_to(fresh);
        assert_eq!(agent.position(), Point::new(0, 0));
        assert_eq!(agent.total_cost(), 0);
        assert!(agent.completed_tasks().is_empty());
        assert!(!agent.is_moving());
        assert_eq!(agent.world().tasks().len(), 1);
    }
}
