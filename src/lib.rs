//! # Sales Index
//!
//! Two independent lookup structures over one table of sales records.
//!
//! ## Architecture
//!
//! - **Types**: The `SalesRecord` row type and input schema
//! - **Store**: Chained hash table (by order ID) and max-heap (by profit)
//! - **Analytics**: Group-by profit sums and rankings over either store
//! - **Loader**: Delimited-text parsing and validation
//! - **Session**: One loaded dataset owning both stores
//! - **Report**: Text rendering of results
//!
//! ## Design Principles
//!
//! 1. **Owned copies**: Each store keeps its own copy of every record
//! 2. **Absence is a value**: Lookups return `Option`, only empty-heap extraction errors
//! 3. **No I/O in the core**: Stores and analytics never read files or print
//! 4. **Single-threaded**: Load once, then query; no locking

// ============================================================================
// Module declarations
// ============================================================================

/// Error type and result alias
pub mod error;

/// Core data types: SalesRecord, schema constants
pub mod types;

/// Record stores: KeyedTable, PriorityStore
pub mod store;

/// Stateless aggregation over record sets
pub mod analytics;

/// Delimited-text loader
pub mod loader;

/// Dataset session owning both stores
pub mod session;

/// Text rendering of query results
pub mod report;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Result, SalesError};
pub use types::SalesRecord;
pub use store::{KeyedTable, PriorityStore};
pub use analytics::{GroupTotal, ProfitSummary, RankedGroup};
pub use loader::{LoadStats, LoaderConfig};
pub use session::Session;
