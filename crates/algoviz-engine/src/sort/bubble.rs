//! Bubble sort: adjacent compare-and-swap passes.

use algoviz_core::TraceRecorder;

/// Each pass compares every adjacent pair in the unsorted prefix, swapping
/// out-of-order pairs, then marks the fixed tail index. Index 0 is marked
/// last.
pub(super) fn sort(array: &mut [f64], rec: &mut TraceRecorder) {
    let n = array.len();

    for pass in 0..n - 1 {
        for j in 0..n - pass - 1 {
            rec.compare(j, j + 1);
            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                rec.swap(j, j + 1, array);
            }
        }
        rec.sorted(n - pass - 1);
    }
    rec.sorted(0);
}

#[cfg(test)]
mod tests {
    use algoviz_core::{SortAlgorithm, StepRecord};

    use crate::sort::run;

    #[test]
    fn three_element_trace() {
        let trace = run(SortAlgorithm::Bubble, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Swap {
                    indices: (0, 1),
                    array: vec![1.0, 3.0, 2.0],
                },
                StepRecord::Compare { indices: (1, 2) },
                StepRecord::Swap {
                    indices: (1, 2),
                    array: vec![1.0, 2.0, 3.0],
                },
                StepRecord::Sorted { index: 2 },
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Sorted { index: 1 },
                StepRecord::Sorted { index: 0 },
                StepRecord::Complete,
            ]
        );
    }

    #[test]
    fn sorted_input_never_swaps() {
        let trace = run(SortAlgorithm::Bubble, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let stats = trace.stats();
        assert_eq!(stats.swaps, 0);
        // 3 + 2 + 1 adjacent comparisons
        assert_eq!(stats.comparisons, 6);
        assert_eq!(trace.sorted_indices(), vec![3, 2, 1, 0]);
    }
}
