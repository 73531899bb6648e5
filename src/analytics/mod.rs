//! Aggregation over a full record set.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: Each call is a pure function of the records passed in
//! 2. **Store-agnostic**: Works over `KeyedTable::iter()` or `PriorityStore::iter()`
//! 3. **Empty in, empty out**: Zero records give empty results, never errors
//!
//! ## Example
//!
//! ```
//! use sales_index::analytics::{by_country, top_items};
//! use sales_index::store::KeyedTable;
//! use sales_index::types::SalesRecord;
//!
//! let mut table = KeyedTable::new();
//! for (id, country, item, profit) in [
//!     ("1", "Peru", "X", 30.0),
//!     ("2", "Chile", "Y", 40.0),
//!     ("3", "Peru", "X", 20.0),
//! ] {
//!     table.insert(SalesRecord {
//!         order_id: id.into(),
//!         country: country.into(),
//!         item_type: item.into(),
//!         total_profit: profit,
//!         ..Default::default()
//!     });
//! }
//!
//! assert_eq!(by_country(table.iter())[0].key, "Peru");
//! assert_eq!(top_items(table.iter(), 1)[0].total_profit, 50.0);
//! ```

pub mod aggregate;

pub use aggregate::{
    by_country, by_region, group_sum, highest_profit_record, summarize, top_items, GroupTotal,
    ProfitSummary, RankedGroup,
};
