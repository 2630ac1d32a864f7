//! Headless driver loop: runs a UCS agent and an A* agent through clones of
//! the same generated world and prints their completion records.
use grid_task_sim::{Algorithm, GridWorld, TaskSeekingAgent};
use grid_util::point::Point;

fn main() {
    let world = GridWorld::generate(12, 8, 5, 20, Some(42)).unwrap();
    println!("{world}");
    for algorithm in [Algorithm::Ucs, Algorithm::Astar] {
        let mut agent = TaskSeekingAgent::new(world.clone(), Point::new(0, 0), algorithm);
        loop {
            if agent.is_moving() {
                agent.advance();
            } else if !agent.select_nearest_task() {
                break;
            }
        }
        println!(
            "{algorithm}: {} of {} tasks completed, total cost {}",
            agent.completed_count(),
            world.tasks().len(),
            agent.total_cost()
        );
        for (task, cost) in agent.completed_tasks() {
            println!("  task {task} reached at cost {cost}");
        }
    }
}
