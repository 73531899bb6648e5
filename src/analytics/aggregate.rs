//! Group-by aggregation over a record set.
//!
//! Every function takes `IntoIterator<Item = &SalesRecord>`, so either
//! store's `iter()` can feed it. Nothing here mutates a store.
//!
//! ## Ordering
//!
//! | Query | Output order |
//! |-------|--------------|
//! | `by_region` | Encounter order (unsorted) |
//! | `by_country` | Descending profit |
//! | `top_items` | Descending profit, ranked from 1 |
//!
//! Region totals being unsorted while country totals are sorted is kept
//! as observed behavior of the tool.

use std::collections::HashMap;

use crate::types::SalesRecord;

/// Profit summed over one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total_profit: f64,
}

/// One entry of a top-N ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGroup {
    /// 1-based position in the ranking
    pub rank: usize,
    pub key: String,
    pub total_profit: f64,
}

/// Totals over a whole record set
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfitSummary {
    pub record_count: usize,
    pub units_sold: u64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
}

// ============================================================================
// Grouping
// ============================================================================

/// Sum `total_profit` per group key in one pass.
///
/// Groups appear in the order their first record was encountered.
///
/// # Example
///
/// ```
/// use sales_index::analytics::group_sum;
/// use sales_index::types::SalesRecord;
///
/// let records = vec![
///     SalesRecord { region: "Asia".into(), total_profit: 10.0, ..Default::default() },
///     SalesRecord { region: "Europe".into(), total_profit: 5.0, ..Default::default() },
///     SalesRecord { region: "Asia".into(), total_profit: 2.5, ..Default::default() },
/// ];
///
/// let totals = group_sum(&records, |r| r.region.as_str());
/// assert_eq!(totals[0].key, "Asia");
/// assert_eq!(totals[0].total_profit, 12.5);
/// ```
pub fn group_sum<'a, I, F>(records: I, key_fn: F) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    F: Fn(&'a SalesRecord) -> &'a str,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<GroupTotal> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match positions.get(key) {
            Some(&pos) => totals[pos].total_profit += record.total_profit,
            None => {
                positions.insert(key, totals.len());
                totals.push(GroupTotal {
                    key: key.to_string(),
                    total_profit: record.total_profit,
                });
            }
        }
    }

    totals
}

/// Stable sort, highest profit first; equal totals keep encounter order
fn sort_descending(totals: &mut [GroupTotal]) {
    totals.sort_by(|a, b| b.total_profit.total_cmp(&a.total_profit));
}

/// Profit per region, in encounter order
pub fn by_region<'a, I>(records: I) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    group_sum(records, |r| r.region.as_str())
}

/// Profit per country, highest first
pub fn by_country<'a, I>(records: I) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut totals = group_sum(records, |r| r.country.as_str());
    sort_descending(&mut totals);
    totals
}

/// The `n` most profitable item types with 1-based ranks.
///
/// Returns `min(n, distinct item types)` entries; `n == 0` returns none.
pub fn top_items<'a, I>(records: I, n: usize) -> Vec<RankedGroup>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut totals = group_sum(records, |r| r.item_type.as_str());
    sort_descending(&mut totals);

    totals
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, group)| RankedGroup {
            rank: i + 1,
            key: group.key,
            total_profit: group.total_profit,
        })
        .collect()
}

// ============================================================================
// Scans
// ============================================================================

/// Linear scan for the most profitable record.
///
/// Strict `>` comparison: among equal profits the first encountered wins.
pub fn highest_profit_record<'a, I>(records: I) -> Option<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut best: Option<&'a SalesRecord> = None;
    for record in records {
        match best {
            Some(current) if record.total_profit <= current.total_profit => {}
            _ => best = Some(record),
        }
    }
    best
}

/// Count and money totals over a record set
pub fn summarize<'a, I>(records: I) -> ProfitSummary
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records
        .into_iter()
        .fold(ProfitSummary::default(), |mut summary, record| {
            summary.record_count += 1;
            summary.units_sold += u64::from(record.units_sold);
            summary.total_revenue += record.total_revenue;
            summary.total_cost += record.total_cost;
            summary.total_profit += record.total_profit;
            summary
        })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, region: &str, country: &str, item: &str, profit: f64) -> SalesRecord {
        SalesRecord {
            order_id: id.to_string(),
            region: region.to_string(),
            country: country.to_string(),
            item_type: item.to_string(),
            total_profit: profit,
            ..SalesRecord::default()
        }
    }

    fn dataset() -> Vec<SalesRecord> {
        vec![
            record("1", "Europe", "France", "Cereal", 100.0),
            record("2", "Asia", "Japan", "Snacks", 300.0),
            record("3", "Europe", "Spain", "Cereal", 50.0),
            record("4", "Africa", "Chad", "Fruits", 20.0),
            record("5", "Asia", "Japan", "Clothes", -40.0),
            record("6", "Europe", "France", "Snacks", 75.0),
        ]
    }

    #[test]
    fn test_group_sum_counts_first_record() {
        let records = dataset();
        let totals = group_sum(&records, |r| r.item_type.as_str());

        let cereal = totals.iter().find(|g| g.key == "Cereal").unwrap();
        assert_eq!(cereal.total_profit, 150.0);
    }

    #[test]
    fn test_group_sum_empty() {
        let records: Vec<SalesRecord> = Vec::new();
        assert!(group_sum(&records, |r| r.region.as_str()).is_empty());
    }

    #[test]
    fn test_by_region_encounter_order() {
        let records = dataset();
        let regions = by_region(&records);

        // Unsorted: Europe (225) is listed before Asia (260)
        let keys: Vec<&str> = regions.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Europe", "Asia", "Africa"]);
        assert_eq!(regions[0].total_profit, 225.0);
        assert_eq!(regions[1].total_profit, 260.0);
        assert_eq!(regions[2].total_profit, 20.0);
    }

    #[test]
    fn test_by_country_sorted_descending() {
        let records = dataset();
        let countries = by_country(&records);

        let keys: Vec<&str> = countries.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Japan", "France", "Spain", "Chad"]);
        assert_eq!(countries[0].total_profit, 260.0);
        assert_eq!(countries[1].total_profit, 175.0);
    }

    #[test]
    fn test_top_items_ranked() {
        let records = dataset();
        let top = top_items(&records, 2);

        assert_eq!(
            top,
            vec![
                RankedGroup { rank: 1, key: "Snacks".to_string(), total_profit: 375.0 },
                RankedGroup { rank: 2, key: "Cereal".to_string(), total_profit: 150.0 },
            ]
        );
    }

    #[test]
    fn test_top_items_bounds() {
        let records = dataset();

        assert!(top_items(&records, 0).is_empty());
        // Only 4 distinct item types
        let all = top_items(&records, 10);
        assert_eq!(all.len(), 4);
        assert_eq!(all.last().unwrap().key, "Clothes");
        assert_eq!(all.last().unwrap().rank, 4);
    }

    #[test]
    fn test_top_items_two_groups() {
        let records = vec![
            record("1", "R", "C", "X", 20.0),
            record("2", "R", "C", "Y", 40.0),
            record("3", "R", "C", "X", 30.0),
        ];

        let top = top_items(&records, 2);
        let flat: Vec<(usize, &str, f64)> = top
            .iter()
            .map(|g| (g.rank, g.key.as_str(), g.total_profit))
            .collect();
        assert_eq!(flat, vec![(1, "X", 50.0), (2, "Y", 40.0)]);
    }

    #[test]
    fn test_highest_profit_record() {
        let empty: Vec<SalesRecord> = Vec::new();
        assert!(highest_profit_record(&empty).is_none());

        let records = vec![
            record("low", "R", "C", "I", 3.0),
            record("best", "R", "C", "I", 42.50),
            record("mid", "R", "C", "I", 41.0),
        ];
        assert_eq!(highest_profit_record(&records).unwrap().order_id, "best");
    }

    #[test]
    fn test_highest_profit_first_wins_ties() {
        let records = vec![
            record("early", "R", "C", "I", 9.0),
            record("late", "R", "C", "I", 9.0),
        ];
        assert_eq!(highest_profit_record(&records).unwrap().order_id, "early");
    }

    #[test]
    fn test_highest_profit_all_negative() {
        let records = vec![
            record("a", "R", "C", "I", -9.0),
            record("b", "R", "C", "I", -2.0),
        ];
        assert_eq!(highest_profit_record(&records).unwrap().order_id, "b");
    }

    #[test]
    fn test_summarize() {
        let mut records = dataset();
        records[0].units_sold = 10;
        records[0].total_revenue = 500.0;
        records[0].total_cost = 400.0;

        let summary = summarize(&records);
        assert_eq!(summary.record_count, 6);
        assert_eq!(summary.units_sold, 10);
        assert_eq!(summary.total_revenue, 500.0);
        assert_eq!(summary.total_cost, 400.0);
        assert_eq!(summary.total_profit, 505.0);

        assert_eq!(summarize(&Vec::<SalesRecord>::new()), ProfitSummary::default());
    }
}
