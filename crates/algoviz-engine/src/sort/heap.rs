//! Heap sort over an implicit binary max-heap.

use algoviz_core::TraceRecorder;

pub(super) fn sort(array: &mut [f64], rec: &mut TraceRecorder) {
    let n = array.len();

    for root in (0..n / 2).rev() {
        sift_down(array, n, root, rec);
    }

    for boundary in (1..n).rev() {
        array.swap(0, boundary);
        rec.swap(0, boundary, array);
        rec.sorted(boundary);
        sift_down(array, boundary, 0, rec);
    }
    rec.sorted(0);
}

/// Restores the heap property below `root` within `array[..size]`.
///
/// Each child is compared against the current largest candidate. When a
/// child wins, it is swapped up and sifting continues into the displaced
/// subtree.
fn sift_down(array: &mut [f64], size: usize, mut root: usize, rec: &mut TraceRecorder) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < size {
            rec.compare(left, largest);
            if array[left] > array[largest] {
                largest = left;
            }
        }

        if right < size {
            rec.compare(right, largest);
            if array[right] > array[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }
        array.swap(root, largest);
        rec.swap(root, largest, array);
        root = largest;
    }
}
