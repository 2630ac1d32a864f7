use criterion::{criterion_group, criterion_main, Criterion};
use grid_task_sim::solver::{AstarSolver, SearchStrategy, UcsSolver};
use grid_task_sim::{Algorithm, GridWorld, TaskSeekingAgent};
use grid_util::point::Point;
use std::hint::black_box;

/// Benchmarks corner-to-corner queries for both strategies on seeded worlds
/// of increasing size.
fn strategy_bench(c: &mut Criterion) {
    for n in [16, 32, 64] {
        let world = GridWorld::generate(n, n, 0, n * n / 5, Some(42)).unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(n as i32 - 1, n as i32 - 1);
        let ucs = UcsSolver;
        let astar = AstarSolver::new();
        c.bench_function(format!("{n}x{n} UCS").as_str(), |b| {
            b.iter(|| black_box(ucs.find_path(&world, start, goal)))
        });
        c.bench_function(format!("{n}x{n} A*").as_str(), |b| {
            b.iter(|| black_box(astar.find_path(&world, start, goal)))
        });
    }
}

/// Benchmarks a full driver loop: select, walk and claim until the task pool
/// is exhausted.
fn agent_run_bench(c: &mut Criterion) {
    let world = GridWorld::generate(32, 32, 10, 150, Some(7)).unwrap();
    for algorithm in [Algorithm::Ucs, Algorithm::Astar] {
        c.bench_function(format!("32x32 agent run, {algorithm}").as_str(), |b| {
            b.iter(|| {
                let mut agent =
                    TaskSeekingAgent::new(world.clone(), Point::new(0, 0), algorithm);
                loop {
                    if agent.is_moving() {
                        agent.advance();
                    } else if !agent.select_nearest_task() {
                        break;
                    }
                }
                black_box(agent.total_cost())
            })
        });
    }
}

criterion_group!(benches, strategy_bench, agent_run_bench);
criterion_main!(benches);
