//! Breadth-first search with a FIFO frontier.

use std::collections::VecDeque;

use algoviz_core::{Position, TraceRecorder};

use super::Visits;

/// Cells are marked visited when enqueued but recorded as `visit` when
/// dequeued. Expansion stops as soon as `end` is dequeued, so the route
/// rebuilt from the predecessor links is a shortest one.
pub(super) fn search(
    start: Position,
    end: Position,
    visits: &mut Visits<'_>,
    rec: &mut TraceRecorder,
) -> bool {
    let grid = visits.grid;
    let mut queue = VecDeque::from([start]);
    visits.mark(start, None);

    while let Some(current) = queue.pop_front() {
        rec.visit(current);
        if current == end {
            return true;
        }

        for next in grid.neighbors(current) {
            if visits.mark(next, Some(current)) {
                queue.push_back(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use algoviz_core::{Grid, Position, SearchAlgorithm, StepRecord};

    use crate::search::run;

    #[test]
    fn visits_in_dequeue_order() {
        let grid = Grid::open(3, 3);
        let trace = run(SearchAlgorithm::BreadthFirst, &grid, Position(0, 0), Position(2, 2)).unwrap();
        assert_eq!(
            trace.visited_cells(),
            vec![
                Position(0, 0),
                Position(0, 1),
                Position(1, 0),
                Position(0, 2),
                Position(1, 1),
                Position(2, 0),
                Position(1, 2),
                Position(2, 1),
                Position(2, 2),
            ]
        );
        // First discoverer wins: (2,2) is reached from (1,2), which came from (0,2).
        assert_eq!(
            trace.path_cells(),
            vec![
                Position(0, 0),
                Position(0, 1),
                Position(0, 2),
                Position(1, 2),
                Position(2, 2),
            ]
        );
    }

    #[test]
    fn rediscovered_cells_keep_first_parent() {
        // (1,1) is offered by (0,1) and again by (1,0); only the first
        // discovery counts, so it is enqueued and visited once.
        let grid = Grid::open(2, 2);
        let trace = run(SearchAlgorithm::BreadthFirst, &grid, Position(0, 0), Position(1, 1)).unwrap();
        assert_eq!(
            trace.visited_cells(),
            vec![Position(0, 0), Position(0, 1), Position(1, 0), Position(1, 1)]
        );
        assert_eq!(
            trace.path_cells(),
            vec![Position(0, 0), Position(0, 1), Position(1, 1)]
        );
    }

    #[test]
    fn stops_once_end_is_dequeued() {
        let grid = Grid::open(1, 5);
        let trace = run(SearchAlgorithm::BreadthFirst, &grid, Position(0, 2), Position(0, 3)).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Visit { position: Position(0, 2) },
                StepRecord::Visit { position: Position(0, 3) },
                StepRecord::Path { position: Position(0, 2) },
                StepRecord::Path { position: Position(0, 3) },
                StepRecord::Complete,
            ]
        );
    }

    #[test]
    fn routes_around_walls() {
        // . # .
        // . # .
        // . . .
        let grid = Grid::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
        let trace = run(SearchAlgorithm::BreadthFirst, &grid, Position(0, 0), Position(0, 2)).unwrap();
        assert_eq!(trace.path_cells().len(), 7);
        assert_eq!(trace.visited_cells().len(), 7);
    }
}
