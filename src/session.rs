//! A loaded dataset and the two stores built from it.
//!
//! ## Design
//!
//! A `Session` owns one `KeyedTable` and one `PriorityStore`. Every record
//! is cloned into both, so the stores share nothing and either can be
//! queried or drained without affecting the other.
//!
//! Loading a new file builds a new session; the previous one is dropped
//! with its stores. There is no global state.
//!
//! ## Example
//!
//! ```
//! use sales_index::session::Session;
//! use sales_index::types::SalesRecord;
//!
//! let records = [("A1", 10.0), ("A2", 50.0), ("A3", 30.0)].map(|(id, profit)| SalesRecord {
//!     order_id: id.to_string(),
//!     total_profit: profit,
//!     ..SalesRecord::default()
//! });
//!
//! let mut session = Session::from_records(records);
//!
//! assert_eq!(session.lookup("A2").unwrap().total_profit, 50.0);
//! assert_eq!(session.top_sale().unwrap().order_id, "A2");
//! assert_eq!(session.pop_top_sale().unwrap().total_profit, 50.0);
//! assert_eq!(session.top_sale().unwrap().order_id, "A3");
//!
//! // The table still holds every record
//! assert_eq!(session.record_count(), 3);
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analytics::{self, GroupTotal, ProfitSummary, RankedGroup};
use crate::error::Result;
use crate::loader::{self, LoadStats, LoaderConfig};
use crate::store::{KeyedTable, PriorityStore};
use crate::types::SalesRecord;

/// Top-N size used when the caller gives none
pub const DEFAULT_TOP_ITEMS: usize = 5;

/// Both stores over one dataset.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Exact lookup by order ID; also the source for aggregation
    table: KeyedTable,

    /// Profit ordering; drained by `pop_top_sale`
    heap: PriorityStore,

    /// File the records came from, if any
    source: Option<PathBuf>,

    /// Statistics of the load that built this session
    load_stats: LoadStats,
}

impl Session {
    /// Build a session by inserting every record into both stores
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SalesRecord>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        let mut table = KeyedTable::with_capacity(lower);
        let mut heap = PriorityStore::with_capacity(lower);

        for record in records {
            heap.insert(record.clone());
            table.insert(record);
        }

        debug!(
            "Session built: {} records, max chain {}",
            table.count(),
            table.max_chain_len()
        );

        Self {
            table,
            heap,
            source: None,
            load_stats: LoadStats::default(),
        }
    }

    /// Load a file and build a session from its valid rows
    pub fn load<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let outcome = loader::load_path(path, config)?;

        let mut session = Self::from_records(outcome.records);
        session.source = Some(path.to_path_buf());
        session.load_stats = outcome.stats;
        Ok(session)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn load_stats(&self) -> &LoadStats {
        &self.load_stats
    }

    /// Number of records loaded (unaffected by heap extraction)
    pub fn record_count(&self) -> usize {
        self.table.count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &KeyedTable {
        &self.table
    }

    pub fn heap(&self) -> &PriorityStore {
        &self.heap
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Exact lookup by order ID
    pub fn lookup(&self, order_id: &str) -> Option<&SalesRecord> {
        self.table.find(order_id)
    }

    /// Highest-profit record still in the heap
    pub fn top_sale(&self) -> Option<&SalesRecord> {
        self.heap.peek_max()
    }

    /// Remove and return the highest-profit record from the heap
    ///
    /// # Errors
    ///
    /// `SalesError::EmptyStore` once every record has been extracted.
    pub fn pop_top_sale(&mut self) -> Result<SalesRecord> {
        self.heap.extract_max()
    }

    /// Highest-profit record found by scanning the table
    pub fn scan_top_sale(&self) -> Option<&SalesRecord> {
        analytics::highest_profit_record(self.table.iter())
    }

    pub fn regions(&self) -> Vec<GroupTotal> {
        analytics::by_region(self.table.iter())
    }

    pub fn countries(&self) -> Vec<GroupTotal> {
        analytics::by_country(self.table.iter())
    }

    pub fn top_items(&self, n: usize) -> Vec<RankedGroup> {
        analytics::top_items(self.table.iter(), n)
    }

    pub fn summary(&self) -> ProfitSummary {
        analytics::summarize(self.table.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesError;
    use std::io::Write;

    fn record(id: &str, item: &str, profit: f64) -> SalesRecord {
        SalesRecord {
            order_id: id.to_string(),
            region: "Europe".to_string(),
            country: "Malta".to_string(),
            item_type: item.to_string(),
            total_profit: profit,
            ..SalesRecord::default()
        }
    }

    fn sample_session() -> Session {
        Session::from_records(vec![
            record("A1", "X", 10.0),
            record("A2", "X", 40.0),
            record("A3", "Y", 40.0),
        ])
    }

    #[test]
    fn test_empty_session() {
        let mut session = Session::default();

        assert!(session.is_empty());
        assert!(session.lookup("A1").is_none());
        assert!(session.top_sale().is_none());
        assert!(session.scan_top_sale().is_none());
        assert!(session.regions().is_empty());
        assert!(session.top_items(DEFAULT_TOP_ITEMS).is_empty());
        assert!(matches!(session.pop_top_sale(), Err(SalesError::EmptyStore)));
    }

    #[test]
    fn test_stores_hold_independent_copies() {
        let mut session = sample_session();

        while session.pop_top_sale().is_ok() {}

        assert!(session.heap().is_empty());
        assert_eq!(session.record_count(), 3);
        assert_eq!(session.lookup("A2").unwrap().total_profit, 40.0);
        assert_eq!(session.scan_top_sale().unwrap().total_profit, 40.0);
    }

    #[test]
    fn test_heap_and_scan_agree_on_profit() {
        let session = sample_session();

        let from_heap = session.top_sale().unwrap();
        let from_scan = session.scan_top_sale().unwrap();
        assert_eq!(from_heap.total_profit, from_scan.total_profit);
    }

    #[test]
    fn test_aggregates() {
        let session = sample_session();

        assert_eq!(
            session.regions(),
            vec![GroupTotal { key: "Europe".to_string(), total_profit: 90.0 }]
        );
        assert_eq!(session.countries()[0].total_profit, 90.0);

        let top = session.top_items(DEFAULT_TOP_ITEMS);
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].key.as_str(), top[0].total_profit), ("X", 50.0));
        assert_eq!(session.summary().record_count, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Region,Country,Item Type,Sales Channel,Order Priority,Order Date,Order ID,Ship Date,Units Sold,Unit Price,Unit Cost,Total Revenue,Total Cost,Total Profit").unwrap();
        writeln!(file, "Asia,Laos,Snacks,Offline,C,2/1/2014,555,2/9/2014,3,152.58,97.44,457.74,292.32,165.42").unwrap();
        writeln!(file, "not,enough,fields").unwrap();

        let session = Session::load(file.path(), &LoaderConfig::default()).unwrap();

        assert_eq!(session.record_count(), 1);
        assert_eq!(session.source(), Some(file.path()));
        assert_eq!(session.load_stats().lines_skipped, 1);
        assert_eq!(session.lookup("555").unwrap().total_profit, 165.42);
    }
}
