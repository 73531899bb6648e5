//! Chained hash table keyed by order ID.
//!
//! ## Architecture
//!
//! - **Slab**: Arena owning every inserted record
//! - **Buckets**: `NUM_BUCKETS` chains of slab keys, in insertion order
//!
//! The bucket count is fixed. The table never rehashes, so chains grow
//! linearly once the record count passes a few thousand.
//!
//! ## Hashing
//!
//! Polynomial rolling hash over the key bytes:
//!
//! ```text
//! h = 0
//! for b in key: h = (h * HASH_PRIME + b) % NUM_BUCKETS
//! ```
//!
//! ## Duplicates
//!
//! Inserting an existing order ID appends a second entry to the same chain.
//! `find` walks the chain from the front, so the first-inserted record wins.
//!
//! ## Example
//!
//! ```
//! use sales_index::store::KeyedTable;
//! use sales_index::types::SalesRecord;
//!
//! let mut table = KeyedTable::new();
//! table.insert(SalesRecord {
//!     order_id: "A2".to_string(),
//!     total_profit: 50.0,
//!     ..SalesRecord::default()
//! });
//!
//! assert_eq!(table.find("A2").map(|r| r.total_profit), Some(50.0));
//! assert!(table.find("A9").is_none());
//! ```

use slab::Slab;

use crate::types::SalesRecord;

/// Number of hash buckets
pub const NUM_BUCKETS: usize = 1024;

/// Multiplier of the rolling hash
pub const HASH_PRIME: usize = 31;

/// Compute the bucket for an order ID.
///
/// Pure: the same key maps to the same bucket on every call.
#[inline]
pub fn bucket_index(order_id: &str) -> usize {
    order_id
        .bytes()
        .fold(0usize, |hash, b| (hash * HASH_PRIME + b as usize) % NUM_BUCKETS)
}

/// Hash table with separate chaining.
#[derive(Debug, Clone)]
pub struct KeyedTable {
    /// Record storage
    /// Key: slab index, Value: owned record
    records: Slab<SalesRecord>,

    /// Fixed bucket array; each chain holds slab keys, oldest first
    buckets: Vec<Vec<usize>>,
}

impl Default for KeyedTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyedTable {
    /// Create an empty table with `NUM_BUCKETS` buckets
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `record_capacity` records
    ///
    /// Only the record arena is pre-allocated; the bucket count is fixed.
    pub fn with_capacity(record_capacity: usize) -> Self {
        Self {
            records: Slab::with_capacity(record_capacity),
            buckets: vec![Vec::new(); NUM_BUCKETS],
        }
    }

    // ========================================================================
    // Insert and Lookup
    // ========================================================================

    /// Insert a record at the tail of its bucket's chain.
    ///
    /// No duplicate check is made.
    pub fn insert(&mut self, record: SalesRecord) {
        let bucket = bucket_index(&record.order_id);
        let key = self.records.insert(record);
        self.buckets[bucket].push(key);
    }

    /// Find the first record whose order ID equals `order_id`
    pub fn find(&self, order_id: &str) -> Option<&SalesRecord> {
        self.buckets[bucket_index(order_id)]
            .iter()
            .map(|&key| &self.records[key])
            .find(|record| record.order_id == order_id)
    }

    /// Check whether any record carries `order_id`
    #[inline]
    pub fn contains(&self, order_id: &str) -> bool {
        self.find(order_id).is_some()
    }

    // ========================================================================
    // Size and Iteration
    // ========================================================================

    /// Total number of records inserted (not the bucket count)
    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, bucket by bucket, each chain oldest first
    pub fn iter(&self) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.buckets
            .iter()
            .flat_map(move |chain| chain.iter().map(move |&key| &self.records[key]))
    }

    /// Remove every record; the bucket array is kept
    pub fn clear(&mut self) {
        self.records.clear();
        for chain in &mut self.buckets {
            chain.clear();
        }
    }

    // ========================================================================
    // Collision Inspection
    // ========================================================================

    /// Length of one bucket's chain (0 for an out-of-range bucket)
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, Vec::len)
    }

    /// Length of the longest chain
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Average chain length: records per bucket
    pub fn load_factor(&self) -> f64 {
        self.count() as f64 / NUM_BUCKETS as f64
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
