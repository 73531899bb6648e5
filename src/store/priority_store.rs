//! Binary max-heap of records ordered by total profit.
//!
//! ## Layout
//!
//! Records live in a `Vec` read as a complete binary tree (0-indexed):
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! ## Heap Property
//!
//! Every non-root node's profit is <= its parent's profit. It holds after
//! every `insert` and every `extract_max`.
//!
//! ## Ties
//!
//! Comparisons are strict, so equal profits are never swapped. Beyond that
//! there is no tie-break: which of two equal records comes out first depends
//! on heap mechanics only.

use crate::error::{Result, SalesError};
use crate::types::SalesRecord;

/// Max-heap keyed on `total_profit`.
#[derive(Debug, Clone, Default)]
pub struct PriorityStore {
    heap: Vec<SalesRecord>,
}

impl PriorityStore {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Heap Operations
    // ========================================================================

    /// Append a record and sift it up to its place
    pub fn insert(&mut self, record: SalesRecord) {
        self.heap.push(record);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the record with the highest profit
    ///
    /// # Errors
    ///
    /// `SalesError::EmptyStore` if the heap has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use sales_index::store::PriorityStore;
    /// use sales_index::types::SalesRecord;
    ///
    /// let mut heap = PriorityStore::new();
    /// for (id, profit) in [("A1", 10.0), ("A2", 50.0), ("A3", 30.0)] {
    ///     heap.insert(SalesRecord {
    ///         order_id: id.to_string(),
    ///         total_profit: profit,
    ///         ..SalesRecord::default()
    ///     });
    /// }
    ///
    /// assert_eq!(heap.extract_max().unwrap().order_id, "A2");
    /// assert_eq!(heap.extract_max().unwrap().total_profit, 30.0);
    /// assert_eq!(heap.extract_max().unwrap().total_profit, 10.0);
    /// assert!(heap.extract_max().is_err());
    /// ```
    pub fn extract_max(&mut self) -> Result<SalesRecord> {
        if self.heap.is_empty() {
            return Err(SalesError::EmptyStore);
        }

        // Move the last leaf to the root, then restore order downward
        let max = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok(max)
    }

    /// The record with the highest profit, without removing it
    #[inline]
    pub fn peek_max(&self) -> Option<&SalesRecord> {
        self.heap.first()
    }

    // ========================================================================
    // Size and Iteration
    // ========================================================================

    #[inline]
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Iterate over records in array (level) order
    pub fn iter(&self) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.heap.iter()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Drain the heap into a vector ordered by descending profit
    pub fn into_sorted_vec(mut self) -> Vec<SalesRecord> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(record) = self.extract_max() {
            sorted.push(record);
        }
        sorted
    }

    /// Check the heap property over the whole array
    pub fn is_valid_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            self.heap[i].total_profit <= self.heap[(i - 1) / 2].total_profit
        })
    }

    // ========================================================================
    // Heap Repair
    // ========================================================================

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].total_profit < self.heap[index].total_profit {
                self.heap.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < len && self.heap[left].total_profit > self.heap[largest].total_profit {
                largest = left;
            }
            if right < len && self.heap[right].total_profit > self.heap[largest].total_profit {
                largest = right;
            }
            if largest == index {
                break;
            }

            self.heap.swap(index, largest);
            index = largest;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
