//! Binary min/max heap over a fixed-capacity buffer
//!
//! Layout:
//! - `parent(i) = (i - 1) / 2`
//! - `left(i)   = 2i + 1`
//! - `right(i)  = 2i + 2`
//!
//! The buffer is allocated once with the declared capacity and never grows.
//! Inserting into a full heap is refused rather than resized.

use crate::error::{DsaError, Result};

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

impl HeapKind {
    /// Whether `a` may sit above `b` in a heap of this kind
    fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Min => a <= b,
            HeapKind::Max => a >= b,
        }
    }
}

/// Binary heap with a fixed capacity and a min or max discriminator.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    items: Vec<T>,
    capacity: usize,
    kind: HeapKind,
}

impl<T: Ord> Heap<T> {
    /// Create an empty heap that can hold up to `capacity` elements.
    pub fn with_capacity(capacity: usize, kind: HeapKind) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            kind,
        }
    }

    /// Adopt `items` as the initial contents and heapify them bottom-up in O(n).
    ///
    /// Fails with [`DsaError::CapacityExceeded`] when more items are supplied
    /// than `capacity` allows.
    pub fn from_vec(mut items: Vec<T>, capacity: usize, kind: HeapKind) -> Result<Self> {
        if items.len() > capacity {
            return Err(DsaError::CapacityExceeded {
                capacity,
                requested: items.len(),
            });
        }
        items.reserve_exact(capacity - items.len());

        let mut heap = Self {
            items,
            capacity,
            kind,
        };
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }
        Ok(heap)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of elements; not to be confused with `len`
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// The min or max element, depending on the heap's kind
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert an element if the capacity has not been reached.
    ///
    /// Returns `false` and leaves the heap untouched when it is full.
    #[must_use = "a full heap refuses the element"]
    pub fn insert(&mut self, element: T) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
        true
    }

    /// Remove and return the min or max element.
    pub fn extract(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(DsaError::HeapEmpty);
        }
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Release the backing buffer; live elements keep heap order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Child that should be compared against `parent` while sifting down.
    /// Returns `parent` itself when it has no children. Equal children pick the left.
    fn comparison_child(&self, parent: usize) -> usize {
        let left = parent * 2 + 1;
        let right = parent * 2 + 2;
        let len = self.items.len();

        if left >= len {
            return parent;
        }
        if right >= len {
            return left;
        }
        if self.kind.prefers(&self.items[left], &self.items[right]) {
            left
        } else {
            right
        }
    }

    fn out_of_order(&self, parent: usize, child: usize) -> bool {
        !self.kind.prefers(&self.items[parent], &self.items[child])
    }

    fn sift_down(&mut self, index: usize) {
        let mut parent = index;
        let mut child = self.comparison_child(parent);
        while child != parent && self.out_of_order(parent, child) {
            self.items.swap(parent, child);
            parent = child;
            child = self.comparison_child(parent);
        }
    }

    fn sift_up(&mut self, index: usize) {
        let mut child = index;
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.out_of_order(parent, child) {
                break;
            }
            self.items.swap(parent, child);
            child = parent;
        }
    }
}
