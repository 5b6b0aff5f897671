//! Depth-first search over an explicit frame stack.
//!
//! Each frame holds a cell and the next direction to try from it, which
//! reproduces the recursive formulation's order: a cell is recorded when
//! entered, its neighbors are tried right, down, left, up, and each neighbor's
//! visited state is checked only when its turn comes.

use algoviz_core::{Position, TraceRecorder, DIRECTIONS};

use super::Visits;

struct Frame {
    cell: Position,
    next_dir: usize,
}

/// Returns as soon as `end` is entered; no further cells are recorded, even
/// for frames still on the stack.
pub(super) fn search(
    start: Position,
    end: Position,
    visits: &mut Visits<'_>,
    rec: &mut TraceRecorder,
) -> bool {
    visits.mark(start, None);
    rec.visit(start);
    if start == end {
        return true;
    }

    let mut stack = vec![Frame {
        cell: start,
        next_dir: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&delta) = DIRECTIONS.get(frame.next_dir) else {
            stack.pop();
            continue;
        };
        frame.next_dir += 1;
        let cell = frame.cell;

        let Some(next) = cell.offset(delta) else {
            continue;
        };
        if !visits.can_enter(next) {
            continue;
        }
        visits.mark(next, Some(cell));

        rec.visit(next);
        if next == end {
            return true;
        }
        stack.push(Frame {
            cell: next,
            next_dir: 0,
        });
    }
    false
}
