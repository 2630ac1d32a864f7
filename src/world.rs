use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use indexmap::IndexMap;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::error::WorldError;

/// Identifier of a task location. Ids are assigned `1..=num_tasks` in
/// generation order and stay stable until the task is claimed.
pub type TaskId = u32;

/// Neighbour offsets in fixed up, down, left, right order. Row indices grow
/// downward, so "up" is `y - 1`. The fixed order makes search tie-breaking
/// deterministic.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// [GridWorld] is a bounded 2D grid of cells holding a static barrier mask in
/// a [BoolGrid] (occupied is [true]) and a registry of numbered task
/// locations. Barrier geometry is fixed once a simulation starts; the task
/// registry shrinks as agents claim tasks. Connected components over the free
/// cells are maintained in a [UnionFind] structure so that searches for
/// unreachable goals can be rejected without flood-filling.
#[derive(Clone, Debug)]
pub struct GridWorld {
    barriers: BoolGrid,
    tasks: IndexMap<Point, TaskId>,
    next_task_id: TaskId,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridWorld {
    /// Creates an empty world with no barriers and no tasks. Call
    /// [generate_components](Self::generate_components) once the barrier
    /// layout is final.
    pub fn new(columns: usize, rows: usize) -> GridWorld {
        GridWorld {
            barriers: BoolGrid::new(columns, rows, false),
            tasks: IndexMap::new(),
            next_task_id: 1,
            components: UnionFind::new(columns * rows),
            components_dirty: true,
        }
    }

    /// Generates a random world: `num_tasks` distinct task cells (ids
    /// `1..=num_tasks` in placement order) followed by `num_barriers` distinct
    /// barrier cells disjoint from the tasks. Both placement loops retry on
    /// collision, so the cell demand is checked against the grid capacity up
    /// front rather than risking a loop that can never finish. A seed makes
    /// the layout reproducible.
    pub fn generate(
        columns: usize,
        rows: usize,
        num_tasks: usize,
        num_barriers: usize,
        seed: Option<u64>,
    ) -> Result<GridWorld, WorldError> {
        let capacity = columns * rows;
        let requested = num_tasks + num_barriers;
        if requested > capacity {
            return Err(WorldError::InsufficientFreeCells {
                requested,
                capacity,
            });
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut world = GridWorld::new(columns, rows);
        while world.tasks.len() < num_tasks {
            let cell = world.random_cell(&mut rng);
            if !world.tasks.contains_key(&cell) {
                world.add_task(cell);
            }
        }
        let mut placed = 0;
        while placed < num_barriers {
            let cell = world.random_cell(&mut rng);
            if !world.tasks.contains_key(&cell) && !world.is_barrier(cell) {
                world.set_barrier(cell);
                placed += 1;
            }
        }
        world.generate_components();
        info!(
            "Generated {}x{} world with {} tasks and {} barriers",
            columns, rows, num_tasks, num_barriers
        );
        Ok(world)
    }

    fn random_cell(&self, rng: &mut StdRng) -> Point {
        Point::new(
            rng.gen_range(0..self.barriers.width) as i32,
            rng.gen_range(0..self.barriers.height) as i32,
        )
    }

    pub fn columns(&self) -> usize {
        self.barriers.width
    }

    pub fn rows(&self) -> usize {
        self.barriers.height
    }

    /// Checks that both coordinates lie within `[0, columns) x [0, rows)`.
    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self.barriers.index_in_bounds(cell.x as usize, cell.y as usize)
    }

    /// Membership test against the barrier mask. Out-of-bounds cells are not
    /// barriers (they are already excluded by [in_bounds](Self::in_bounds)).
    pub fn is_barrier(&self, cell: Point) -> bool {
        self.in_bounds(cell) && self.barriers.get_point(cell)
    }

    /// The passable 4-connected neighbours of a cell in fixed up, down, left,
    /// right order, restricted to in-bounds non-barrier cells.
    pub fn neighbors(&self, cell: Point) -> SmallVec<[Point; 4]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(cell.x + dx, cell.y + dy))
            .filter(|p| self.in_bounds(*p) && !self.barriers.get_point(*p))
            .collect()
    }

    /// Marks a cell as impassable. Only valid before a simulation starts:
    /// barrier geometry is immutable once agents begin searching.
    pub fn set_barrier(&mut self, cell: Point) {
        debug_assert!(self.in_bounds(cell));
        debug_assert!(!self.tasks.contains_key(&cell));
        self.barriers.set_point(cell, true);
        self.components_dirty = true;
    }

    /// Registers a task at a free cell and returns its id.
    pub fn add_task(&mut self, cell: Point) -> TaskId {
        debug_assert!(self.in_bounds(cell) && !self.is_barrier(cell));
        debug_assert!(!self.tasks.contains_key(&cell));
        let id = self.next_task_id;
        self.next_task_id += 1;
        self.tasks.insert(cell, id);
        id
    }

    /// Removes and returns the task at `cell` if one exists. This is the only
    /// mutating query; a second call on the same cell yields [None].
    pub fn claim_task_at(&mut self, cell: Point) -> Option<TaskId> {
        // shift_remove keeps the iteration order of the remaining tasks.
        self.tasks.shift_remove(&cell)
    }

    /// Read-only view of the outstanding tasks, iterated in insertion order.
    pub fn tasks(&self) -> &IndexMap<Point, TaskId> {
        &self.tasks
    }

    /// Iterates over all barrier cells, row by row.
    pub fn barrier_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.barriers.width as i32;
        let h = self.barriers.height as i32;
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
            .filter(|p| self.barriers.get_point(*p))
    }

    fn cell_ix(&self, cell: &Point) -> usize {
        self.barriers.get_ix(cell.x as usize, cell.y as usize)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, cell: &Point) -> usize {
        self.components.find(self.cell_ix(cell))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. While the
    /// components are dirty this conservatively answers [false], leaving the
    /// decision to an actual search.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            return false;
        }
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            !self.components.equiv(self.cell_ix(start), self.cell_ix(goal))
        } else {
            true
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.barriers.width;
        let h = self.barriers.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.barriers.get(x, y) {
                    let parent_ix = self.barriers.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Linking down and right covers all 4-connected edges
                    // over the full sweep.
                    let neighbours = [
                        Point::new(point.x, point.y + 1),
                        Point::new(point.x + 1, point.y),
                    ];
                    for p in neighbours {
                        if self.in_bounds(p) && !self.barriers.get_point(p) {
                            self.components.union(parent_ix, self.cell_ix(&p));
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.barriers.height as i32 {
            for x in 0..self.barriers.width as i32 {
                let p = Point::new(x, y);
                if self.barriers.get_point(p) {
                    write!(f, "#")?;
                } else if self.tasks.contains_key(&p) {
                    write!(f, "T")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
