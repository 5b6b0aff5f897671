//! Quick sort with Lomuto partitioning around the last element.
//!
//! Partitions are processed from an explicit stack of half-open ranges
//! instead of recursion. The left range is always popped before the right
//! one, which reproduces the recursive emission order exactly since nothing
//! is recorded after a partition's recursive calls.

use std::ops::Range;

use algoviz_core::TraceRecorder;

pub(super) fn sort(array: &mut [f64], rec: &mut TraceRecorder) {
    let mut pending: Vec<Range<usize>> = vec![0..array.len()];

    while let Some(range) = pending.pop() {
        match range.len() {
            0 => {}
            1 => rec.sorted(range.start),
            _ => {
                let pivot = partition(array, range.clone(), rec);
                pending.push(pivot + 1..range.end);
                pending.push(range.start..pivot);
            }
        }
    }
}

/// Partitions `array[range]` around its last element and returns the
/// pivot's final index, which is recorded as `sorted`.
fn partition(array: &mut [f64], range: Range<usize>, rec: &mut TraceRecorder) -> usize {
    let high = range.end - 1;
    let pivot = array[high];
    rec.pivot(high);

    // Next slot of the low partition.
    let mut store = range.start;
    for j in range.start..high {
        rec.compare(j, high);
        if array[j] < pivot {
            array.swap(store, j);
            rec.swap(store, j, array);
            store += 1;
        }
    }

    array.swap(store, high);
    rec.swap(store, high, array);
    rec.sorted(store);
    store
}

#[cfg(test)]
mod tests {
    use algoviz_core::{SortAlgorithm, StepRecord};

    use crate::sort::run;

    #[test]
    fn two_element_trace() {
        let trace = run(SortAlgorithm::Quick, &[2.0, 1.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Pivot { index: 1 },
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Swap {
                    indices: (0, 1),
                    array: vec![1.0, 2.0],
                },
                StepRecord::Sorted { index: 0 },
                StepRecord::Sorted { index: 1 },
                StepRecord::Complete,
            ]
        );
        assert_eq!(trace.last_snapshot(), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn self_swaps_are_recorded() {
        // [1, 3, 2]: pivot 2, element 1 joins the low side in place.
        let trace = run(SortAlgorithm::Quick, &[1.0, 3.0, 2.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Pivot { index: 2 },
                StepRecord::Compare { indices: (0, 2) },
                StepRecord::Swap {
                    indices: (0, 0),
                    array: vec![1.0, 3.0, 2.0],
                },
                StepRecord::Compare { indices: (1, 2) },
                StepRecord::Swap {
                    indices: (1, 2),
                    array: vec![1.0, 2.0, 3.0],
                },
                StepRecord::Sorted { index: 1 },
                StepRecord::Sorted { index: 0 },
                StepRecord::Sorted { index: 2 },
                StepRecord::Complete,
            ]
        );
    }

    #[test]
    fn left_partition_is_fully_processed_before_right() {
        let trace = run(SortAlgorithm::Quick, &[4.0, 5.0, 1.0, 3.0, 2.0]).unwrap();
        let pivots: Vec<usize> = trace
            .iter()
            .filter_map(|s| match s {
                StepRecord::Pivot { index } => Some(*index),
                _ => None,
            })
            .collect();
        // Pivot 2 lands at 1 and the singleton [0, 1) is marked next. In
        // [2, 5) pivot 5 stays at 4, then [2, 4) places 3 at 2 and leaves
        // the singleton [3, 4).
        assert_eq!(pivots, vec![4, 4, 3]);
        assert_eq!(trace.sorted_indices(), vec![1, 0, 4, 2, 3]);
    }
}
