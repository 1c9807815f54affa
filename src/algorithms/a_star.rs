use crate::algorithms::common::{
    check_bounds, is_enterable, manhattan, PathResult, PathfindingAlgorithm,
};
use crate::error::{Error, Result};
use crate::grid::{GridView, Position};
use crate::statistics::SearchStats;
use log::{debug, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cost of one move between adjacent cells.
pub const STEP_COST: u32 = 1;

/// Index of a node in the search arena.
type NodeId = usize;

/// Search record for one discovered cell. `parent` points back into the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
    position: Position,
    g: u32,
    h: u32,
    parent: Option<NodeId>,
}

impl Node {
    fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct QueueEntry {
    f: u32,
    seq: u64,
    node: NodeId,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; equal f goes to the earliest insertion.
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

/// What the frontier did with an offered candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Offer {
    Inserted,
    Replaced,
    Kept,
}

/// Open set: a heap ordered by (f, insertion order) plus an index holding the
/// single live node per position. Replaced heap entries are skipped on pop.
#[derive(Default)]
struct Frontier {
    queue: BinaryHeap<QueueEntry>,
    index: FxHashMap<Position, NodeId>,
    next_seq: u64,
}

impl Frontier {
    fn offer(&mut self, arena: &mut Vec<Node>, candidate: Node) -> Offer {
        let outcome = match self.index.get(&candidate.position) {
            // Only a strictly cheaper candidate may take over the slot.
            Some(&existing) if candidate.f() >= arena[existing].f() => return Offer::Kept,
            Some(_) => Offer::Replaced,
            None => Offer::Inserted,
        };

        let id = arena.len();
        arena.push(candidate);
        self.index.insert(candidate.position, id);
        self.queue.push(QueueEntry {
            f: candidate.f(),
            seq: self.next_seq,
            node: id,
        });
        self.next_seq += 1;
        outcome
    }

    fn pop(&mut self, arena: &[Node]) -> Option<NodeId> {
        while let Some(entry) = self.queue.pop() {
            let position = arena[entry.node].position;
            if self.index.get(&position) == Some(&entry.node) {
                self.index.remove(&position);
                return Some(entry.node);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up. `None` searches
    /// until the frontier is exhausted.
    pub max_iterations: Option<usize>,
}

/// Everything a finished search knows: the result, the sealed cells and the
/// counters collected on the way.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub result: PathResult,
    pub sealed: FxHashSet<Position>,
    pub stats: SearchStats,
}

/// A* over a 4-connected grid with uniform step cost and a Manhattan
/// heuristic. Sealed cells are never reopened.
#[derive(Debug, Default)]
pub struct AStar {
    config: SearchConfig,
    last_stats: Option<SearchStats>,
}

impl AStar {
    pub fn new() -> Self {
        AStar::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        AStar {
            config,
            last_stats: None,
        }
    }

    /// Runs the search from `start` to `goal`.
    ///
    /// Both positions must lie inside the grid, otherwise
    /// [`Error::InvalidInput`] is returned without searching. The goal cell is
    /// always treated as open; the start cell is not checked at all.
    pub fn search(
        &self,
        grid: &dyn GridView,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome> {
        check_bounds(grid, start)?;
        check_bounds(grid, goal)?;
        debug!("A* search from {} to {}", start, goal);

        let mut arena: Vec<Node> = Vec::new();
        let mut frontier = Frontier::default();
        let mut sealed: FxHashSet<Position> = FxHashSet::default();
        let mut stats = SearchStats::default();

        frontier.offer(
            &mut arena,
            Node {
                position: start,
                g: 0,
                h: manhattan(start, goal),
                parent: None,
            },
        );
        stats.inserted += 1;
        stats.peak_frontier = frontier.len();

        while let Some(current_id) = frontier.pop(&arena) {
            let current = arena[current_id];

            if current.position == goal {
                let path = reconstruct_path(&arena, current_id);
                stats.path_moves = Some(path.len() - 1);
                debug!(
                    "A* reached {} after expanding {} nodes, {} moves",
                    goal,
                    stats.expanded,
                    path.len() - 1
                );
                return Ok(SearchOutcome {
                    result: PathResult::Found(path),
                    sealed,
                    stats,
                });
            }

            if let Some(limit) = self.config.max_iterations {
                if stats.expanded >= limit {
                    warn!(
                        "A* search from {} to {} hit the limit of {} iterations",
                        start, goal, limit
                    );
                    return Err(Error::IterationLimit { limit });
                }
            }

            sealed.insert(current.position);
            stats.expanded += 1;
            trace!(
                "expand {} g={} h={} f={}",
                current.position,
                current.g,
                current.h,
                current.f()
            );

            for next in grid.neighbors(current.position) {
                if !is_enterable(grid, next, goal) || sealed.contains(&next) {
                    continue;
                }
                stats.generated += 1;

                let candidate = Node {
                    position: next,
                    g: current.g.saturating_add(STEP_COST),
                    h: manhattan(next, goal),
                    parent: Some(current_id),
                };
                match frontier.offer(&mut arena, candidate) {
                    Offer::Inserted => stats.inserted += 1,
                    Offer::Replaced => stats.replaced += 1,
                    Offer::Kept => stats.rejected += 1,
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        debug!(
            "A* found no path from {} to {}, {} nodes sealed",
            start,
            goal,
            sealed.len()
        );
        Ok(SearchOutcome {
            result: PathResult::NotFound,
            sealed,
            stats,
        })
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn find_path(
        &mut self,
        grid: &dyn GridView,
        start: Position,
        goal: Position,
    ) -> Result<PathResult> {
        let outcome = self.search(grid, start, goal)?;
        self.last_stats = Some(outcome.stats);
        Ok(outcome.result)
    }

    fn stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

/// Follows parent links from `id` back to the root, returning start→id order.
fn reconstruct_path(arena: &[Node], mut id: NodeId) -> Vec<Position> {
    let mut path = Vec::new();
    loop {
        let node = &arena[id];
        path.push(node.position);
        match node.parent {
            Some(parent) => id = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
