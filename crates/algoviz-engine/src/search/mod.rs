//! Instrumented grid search.
//!
//! [`run`] validates both endpoints against the grid and dispatches to the
//! selected strategy. Both strategies share the same bookkeeping: a visited
//! set and a predecessor map filled in at the moment a cell is first marked
//! visited. When the end cell is reached, the route is rebuilt from the
//! predecessor links and recorded as `path` steps in start-to-end order.

mod bfs;
mod dfs;

use algoviz_core::{Endpoint, Grid, Position, SearchAlgorithm, Trace, TraceError, TraceRecorder};

/// Explores `grid` from `start` toward `end`, recording every visited cell
/// and, when `end` is reachable, the route found.
///
/// Fails with [`TraceError::InvalidPosition`] before recording anything when
/// either endpoint is out of bounds or on a wall. An unreachable `end` is not
/// an error: the trace simply holds no `path` records.
pub fn run(
    algorithm: SearchAlgorithm,
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<Trace, TraceError> {
    check_endpoint(grid, Endpoint::Start, start)?;
    check_endpoint(grid, Endpoint::End, end)?;

    let mut rec = TraceRecorder::new();
    let mut visits = Visits::new(grid);

    let found = match algorithm {
        SearchAlgorithm::BreadthFirst => bfs::search(start, end, &mut visits, &mut rec),
        SearchAlgorithm::DepthFirst => dfs::search(start, end, &mut visits, &mut rec),
    };

    if found {
        for position in visits.route_to(end) {
            rec.path(position);
        }
    }

    Ok(rec.finish())
}

/// Parses the selector and runs it. Convenience for string-keyed callers.
pub fn run_named(
    algorithm: &str,
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<Trace, TraceError> {
    run(algorithm.parse()?, grid, start, end)
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, position: Position) -> Result<(), TraceError> {
    let reason = if !grid.contains(position) {
        format!("outside a {}x{} grid", grid.rows(), grid.cols())
    } else if !grid.is_open(position) {
        "cell is a wall".to_string()
    } else {
        return Ok(());
    };
    Err(TraceError::InvalidPosition {
        endpoint,
        row: position.row() as i64,
        col: position.col() as i64,
        reason,
    })
}

/// Visited flags and predecessor links, indexed row-major.
struct Visits<'g> {
    grid: &'g Grid,
    visited: Vec<bool>,
    parent: Vec<Option<Position>>,
}

impl<'g> Visits<'g> {
    fn new(grid: &'g Grid) -> Self {
        Visits {
            grid,
            visited: vec![false; grid.len()],
            parent: vec![None; grid.len()],
        }
    }

    fn is_visited(&self, pos: Position) -> bool {
        self.grid
            .index_of(pos)
            .is_some_and(|idx| self.visited[idx])
    }

    /// Marks `pos` visited and records who discovered it. Returns false if it
    /// was already visited, leaving the existing link untouched.
    fn mark(&mut self, pos: Position, parent: Option<Position>) -> bool {
        let Some(idx) = self.grid.index_of(pos) else {
            return false;
        };
        if self.visited[idx] {
            return false;
        }
        self.visited[idx] = true;
        self.parent[idx] = parent;
        true
    }

    /// Whether `pos` is an open, in-bounds cell not yet visited.
    fn can_enter(&self, pos: Position) -> bool {
        self.grid.is_open(pos) && !self.is_visited(pos)
    }

    /// Follows predecessor links back from `end` and returns the route in
    /// start-to-end order.
    fn route_to(&self, end: Position) -> Vec<Position> {
        let mut route = vec![end];
        let mut current = end;
        while let Some(prev) = self.grid.index_of(current).and_then(|idx| self.parent[idx]) {
            route.push(prev);
            current = prev;
        }
        route.reverse();
        route
    }
}
