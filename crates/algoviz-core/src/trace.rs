//! Ordered step traces and the recorder the engines build them with.
//!
//! A [`Trace`] is produced fresh per invocation and handed to the caller
//! whole. Engines never construct one directly: they drive a
//! [`TraceRecorder`], whose `finish` appends the single terminal
//! [`StepRecord::Complete`] and consumes the recorder.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::step::StepRecord;

/// The complete, ordered sequence of steps emitted by one engine run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<StepRecord>,
}

/// Per-kind counters over a trace, mirroring the comparison and swap
/// counters a playback layer accumulates while animating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub shifts: usize,
    pub inserts: usize,
    pub visits: usize,
    pub path_len: usize,
}

impl Trace {
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    /// Whether the trace ends in its single terminal `complete` record.
    pub fn is_complete(&self) -> bool {
        self.steps.last().is_some_and(StepRecord::is_complete)
            && self.steps.iter().filter(|s| s.is_complete()).count() == 1
    }

    /// Array state after the last mutating step, if any step mutated.
    pub fn last_snapshot(&self) -> Option<&[f64]> {
        self.steps.iter().rev().find_map(StepRecord::snapshot)
    }

    /// Indices of `sorted` records in emission order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                StepRecord::Sorted { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Cells of `visit` records in emission order.
    pub fn visited_cells(&self) -> Vec<Position> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                StepRecord::Visit { position } => Some(*position),
                _ => None,
            })
            .collect()
    }

    /// Cells of `path` records, start to end. Empty when no route exists.
    pub fn path_cells(&self) -> Vec<Position> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                StepRecord::Path { position } => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats {
            steps: self.steps.len(),
            ..TraceStats::default()
        };
        for step in &self.steps {
            match step {
                StepRecord::Compare { .. } => stats.comparisons += 1,
                StepRecord::Swap { .. } => stats.swaps += 1,
                StepRecord::Shift { .. } => stats.shifts += 1,
                StepRecord::Insert { .. } => stats.inserts += 1,
                StepRecord::Visit { .. } => stats.visits += 1,
                StepRecord::Path { .. } => stats.path_len += 1,
                _ => {}
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only builder for a [`Trace`].
///
/// Snapshot-taking methods copy the given slice into a new `Vec`, so no two
/// records ever share storage with each other or with the working array.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<StepRecord>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn compare(&mut self, i: usize, j: usize) {
        self.steps.push(StepRecord::Compare { indices: (i, j) });
    }

    pub fn swap(&mut self, i: usize, j: usize, array: &[f64]) {
        self.steps.push(StepRecord::Swap {
            indices: (i, j),
            array: array.to_vec(),
        });
    }

    pub fn shift(&mut self, from: usize, to: usize, array: &[f64]) {
        self.steps.push(StepRecord::Shift {
            indices: (from, to),
            array: array.to_vec(),
        });
    }

    pub fn insert(&mut self, index: usize, array: &[f64]) {
        self.steps.push(StepRecord::Insert {
            index,
            array: array.to_vec(),
        });
    }

    pub fn current(&mut self, index: usize) {
        self.steps.push(StepRecord::Current { index });
    }

    pub fn pivot(&mut self, index: usize) {
        self.steps.push(StepRecord::Pivot { index });
    }

    pub fn sorted(&mut self, index: usize) {
        self.steps.push(StepRecord::Sorted { index });
    }

    pub fn visit(&mut self, position: Position) {
        self.steps.push(StepRecord::Visit { position });
    }

    pub fn path(&mut self, position: Position) {
        self.steps.push(StepRecord::Path { position });
    }

    /// Appends the terminal `complete` record and yields the trace.
    pub fn finish(mut self) -> Trace {
        self.steps.push(StepRecord::Complete);
        Trace { steps: self.steps }
    }
}
