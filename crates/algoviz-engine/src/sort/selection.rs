//! Selection sort: pick the running minimum of the unsorted suffix.

use algoviz_core::TraceRecorder;

pub(super) fn sort(array: &mut [f64], rec: &mut TraceRecorder) {
    let n = array.len();

    for i in 0..n - 1 {
        let mut min_idx = i;
        rec.current(i);

        for j in i + 1..n {
            rec.compare(min_idx, j);
            if array[j] < array[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            array.swap(i, min_idx);
            rec.swap(i, min_idx, array);
        }
        rec.sorted(i);
    }
    rec.sorted(n - 1);
}

#[cfg(test)]
mod tests {
    use algoviz_core::{SortAlgorithm, StepRecord};

    use crate::sort::run;

    #[test]
    fn compares_against_running_minimum() {
        let trace = run(SortAlgorithm::Selection, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Current { index: 0 },
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Compare { indices: (1, 2) },
                StepRecord::Swap {
                    indices: (0, 1),
                    array: vec![1.0, 3.0, 2.0],
                },
                StepRecord::Sorted { index: 0 },
                StepRecord::Current { index: 1 },
                StepRecord::Compare { indices: (1, 2) },
                StepRecord::Swap {
                    indices: (1, 2),
                    array: vec![1.0, 2.0, 3.0],
                },
                StepRecord::Sorted { index: 1 },
                StepRecord::Sorted { index: 2 },
                StepRecord::Complete,
            ]
        );
    }

    #[test]
    fn minimum_in_place_skips_swap() {
        let trace = run(SortAlgorithm::Selection, &[1.0, 2.0]).unwrap();
        assert_eq!(
            trace.steps(),
            &[
                StepRecord::Current { index: 0 },
                StepRecord::Compare { indices: (0, 1) },
                StepRecord::Sorted { index: 0 },
                StepRecord::Sorted { index: 1 },
                StepRecord::Complete,
            ]
        );
    }
}
