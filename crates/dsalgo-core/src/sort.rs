//! Sorting on top of [`Heap`]

use crate::error::Result;
use crate::heap::{Heap, HeapKind};

/// Sort ascending by repeatedly extracting the maximum of a max-heap and
/// filling the output from the back.
///
/// O(n log n), not stable.
pub fn heap_sort<T: Ord>(values: Vec<T>) -> Result<Vec<T>> {
    let len = values.len();
    let mut heap = Heap::from_vec(values, len, HeapKind::Max)?;

    let mut sorted = Vec::with_capacity(len);
    while !heap.is_empty() {
        sorted.push(heap.extract()?);
    }
    sorted.reverse();
    Ok(sorted)
}
