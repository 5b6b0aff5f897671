//! The step vocabulary shared by every trace producer.
//!
//! A [`StepRecord`] describes one externally observable micro-operation. The
//! set of kinds is closed: playback layers match on it exhaustively. Records
//! serialize with a `type` discriminant plus the kind-specific fields, e.g.
//! `{"type":"swap","indices":[0,1],"array":[1,3,2]}`.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A single recorded step. All indices and positions are 0-based.
///
/// Array snapshots are owned copies of the working array taken immediately
/// after the mutation the step describes. Whole-valued elements serialize as
/// JSON integers, so `[1, 3, 2]` rather than `[1.0, 3.0, 2.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepRecord {
    /// Elements at `indices.0` and `indices.1` were inspected.
    Compare { indices: (usize, usize) },
    /// Elements at the two indices were exchanged.
    Swap {
        indices: (usize, usize),
        #[serde(serialize_with = "snapshot_values::serialize")]
        array: Vec<f64>,
    },
    /// The element at `indices.0` was copied into `indices.1`.
    Shift {
        indices: (usize, usize),
        #[serde(serialize_with = "snapshot_values::serialize")]
        array: Vec<f64>,
    },
    /// The held key was placed at `index`.
    Insert {
        index: usize,
        #[serde(serialize_with = "snapshot_values::serialize")]
        array: Vec<f64>,
    },
    /// Outer-loop cursor.
    Current { index: usize },
    /// Partition pivot.
    Pivot { index: usize },
    /// `index` holds its final value.
    Sorted { index: usize },
    /// Terminal marker.
    Complete,
    /// A search newly discovered or expanded this cell.
    Visit { position: Position },
    /// This cell lies on the reconstructed start-to-end route.
    Path { position: Position },
}

impl StepRecord {
    /// The literal `type` tag this record serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            StepRecord::Compare { .. } => "compare",
            StepRecord::Swap { .. } => "swap",
            StepRecord::Shift { .. } => "shift",
            StepRecord::Insert { .. } => "insert",
            StepRecord::Current { .. } => "current",
            StepRecord::Pivot { .. } => "pivot",
            StepRecord::Sorted { .. } => "sorted",
            StepRecord::Complete => "complete",
            StepRecord::Visit { .. } => "visit",
            StepRecord::Path { .. } => "path",
        }
    }

    /// The array snapshot carried by mutating steps.
    pub fn snapshot(&self) -> Option<&[f64]> {
        match self {
            StepRecord::Swap { array, .. }
            | StepRecord::Shift { array, .. }
            | StepRecord::Insert { array, .. } => Some(array),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, StepRecord::Complete)
    }
}

mod snapshot_values {
    use serde::{Serialize, Serializer};

    /// 2^53; every integer below this magnitude is exact in an `f64`.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    struct Element(f64);

    impl Serialize for Element {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let value = self.0;
            if value.fract() == 0.0 && value.abs() < MAX_EXACT {
                serializer.serialize_i64(value as i64)
            } else {
                serializer.serialize_f64(value)
            }
        }
    }

    pub(super) fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().copied().map(Element))
    }
}
