//! Record stores for sales-index.
//!
//! ## Components
//!
//! - [`KeyedTable`]: Chained hash table for exact lookup by order ID
//! - [`PriorityStore`]: Binary max-heap for highest-profit retrieval
//!
//! Each store owns its own copy of every record. Nothing is shared between
//! them, so each can be tested and measured on its own.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Table insert | O(1) |
//! | Table find | O(1) expected, O(chain) worst |
//! | Heap insert | O(log n) |
//! | Heap extract max | O(log n) |
//! | Heap peek max | O(1) |

pub mod keyed_table;
pub mod priority_store;

pub use keyed_table::{bucket_index, KeyedTable, HASH_PRIME, NUM_BUCKETS};
pub use priority_store::PriorityStore;
