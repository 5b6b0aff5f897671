//! Insertion sort: shift larger predecessors right, then drop the held key.

use algoviz_core::TraceRecorder;

/// Only comparisons that trigger a shift are recorded; the comparison that
/// ends the inner loop is not. Every index is marked `sorted` at the end, in
/// ascending order.
pub(super) fn sort(array: &mut [f64], rec: &mut TraceRecorder) {
    let n = array.len();

    for i in 1..n {
        let key = array[i];
        let mut slot = i;
        rec.current(i);

        while slot > 0 && array[slot - 1] > key {
            rec.compare(slot - 1, slot);
            array[slot] = array[slot - 1];
            rec.shift(slot - 1, slot, array);
            slot -= 1;
        }
        array[slot] = key;
        rec.insert(slot, array);
    }

    for i in 0..n {
        rec.sorted(i);
    }
}

#[cfg(test)]
mod tests {
    use algoviz_core::{SortAlgorithm, StepRecord};

    use crate::sort::run;

    #[test]
    fn shifts_then_inserts() {
        let trace = run(SortAlgorithm::Insertion, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Current { index: 1 },
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Shift {
                    indices: (0, 1),
                    array: vec![3.0, 3.0, 2.0],
                },
                StepRecord::Insert {
                    index: 0,
                    array: vec![1.0, 3.0, 2.0],
                },
                StepRecord::Current { index: 2 },
                StepRecord::Compare { indices: (1, 2) },
                StepRecord::Shift {
                    indices: (1, 2),
                    array: vec![1.0, 3.0, 3.0],
                },
                StepRecord::Insert {
                    index: 1,
                    array: vec![1.0, 2.0, 3.0],
                },
                StepRecord::Sorted { index: 0 },
                StepRecord::Sorted { index: 1 },
                StepRecord::Sorted { index: 2 },
                StepRecord::Complete,
            ]
        );
    }

    #[test]
    fn in_order_key_inserts_in_place() {
        let trace = run(SortAlgorithm::Insertion, &[1.0, 2.0]).unwrap();
        assert_eq!(
            &trace.steps()[..2],
            &[
                StepRecord::Current { index: 1 },
                StepRecord::Insert {
                    index: 1,
                    array: vec![1.0, 2.0],
                },
            ]
        );
    }
}
