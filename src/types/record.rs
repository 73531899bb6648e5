//! Sales record type shared by both stores.
//!
//! ## Ownership
//!
//! A `SalesRecord` is built once by the loader and then cloned into each
//! store. The stores only hand out shared references, so a record is never
//! mutated after insertion.
//!
//! ## Column Layout
//!
//! Input files carry the 14 columns listed in [`COLUMNS`], in that order.
//! The order ID sits in the middle of the row (column 7), not at the front.

// ============================================================================
// Schema constants
// ============================================================================

/// Number of delimited fields in one input row
pub const FIELD_COUNT: usize = 14;

/// Column headers in file order
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "Region",
    "Country",
    "Item Type",
    "Sales Channel",
    "Order Priority",
    "Order Date",
    "Order ID",
    "Ship Date",
    "Units Sold",
    "Unit Price",
    "Unit Cost",
    "Total Revenue",
    "Total Cost",
    "Total Profit",
];

// ============================================================================
// SalesRecord struct
// ============================================================================

/// One sales transaction.
///
/// ## Invariants
///
/// - `order_id` is non-empty for every record that reaches a store
/// - `total_profit` is finite; it is the ordering key of the profit heap
///
/// ## Example
///
/// ```
/// use sales_index::types::SalesRecord;
///
/// let record = SalesRecord {
///     order_id: "669165933".to_string(),
///     region: "Australia and Oceania".to_string(),
///     country: "Tuvalu".to_string(),
///     item_type: "Baby Food".to_string(),
///     units_sold: 9925,
///     total_profit: 951410.50,
///     ..SalesRecord::default()
/// };
///
/// assert!(record.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesRecord {
    /// Order identifier, the key of the hash table
    pub order_id: String,

    pub region: String,
    pub country: String,
    pub item_type: String,
    pub sales_channel: String,
    pub order_priority: String,

    /// Dates are kept verbatim (e.g. "5/28/2010"); they are never compared
    pub order_date: String,
    pub ship_date: String,

    pub units_sold: u32,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub total_revenue: f64,
    pub total_cost: f64,

    /// Profit of the whole order; may be negative
    pub total_profit: f64,
}

impl SalesRecord {
    /// Check the invariants a store relies on
    pub fn is_valid(&self) -> bool {
        !self.order_id.is_empty() && self.total_profit.is_finite()
    }

    /// Label/value pairs for display, excluding the order ID.
    ///
    /// Money columns are returned raw; rounding is the renderer's job.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("Region", FieldValue::Text(&self.region)),
            ("Country", FieldValue::Text(&self.country)),
            ("Item Type", FieldValue::Text(&self.item_type)),
            ("Sales Channel", FieldValue::Text(&self.sales_channel)),
            ("Order Priority", FieldValue::Text(&self.order_priority)),
            ("Order Date", FieldValue::Text(&self.order_date)),
            ("Ship Date", FieldValue::Text(&self.ship_date)),
            ("Units Sold", FieldValue::Count(self.units_sold)),
            ("Unit Price", FieldValue::Money(self.unit_price)),
            ("Unit Cost", FieldValue::Money(self.unit_cost)),
            ("Total Revenue", FieldValue::Money(self.total_revenue)),
            ("Total Cost", FieldValue::Money(self.total_cost)),
            ("Total Profit", FieldValue::Money(self.total_profit)),
        ]
    }
}

/// A displayable record field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u32),
    Money(f64),
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SalesRecord {
        SalesRecord {
            order_id: "443368995".to_string(),
            region: "Sub-Saharan Africa".to_string(),
            country: "Chad".to_string(),
            item_type: "Office Supplies".to_string(),
            sales_channel: "Online".to_string(),
            order_priority: "L".to_string(),
            order_date: "1/27/2011".to_string(),
            ship_date: "2/12/2011".to_string(),
            units_sold: 4484,
            unit_price: 651.21,
            unit_cost: 524.96,
            total_revenue: 2920025.64,
            total_cost: 2353920.64,
            total_profit: 566105.00,
        }
    }

    #[test]
    fn test_columns_order() {
        assert_eq!(COLUMNS.len(), FIELD_COUNT);
        assert_eq!(COLUMNS[6], "Order ID");
        assert_eq!(COLUMNS[13], "Total Profit");
    }

    #[test]
    fn test_record_validity() {
        let record = sample();
        assert!(record.is_valid());

        let mut no_id = sample();
        no_id.order_id.clear();
        assert!(!no_id.is_valid());

        let mut nan_profit = sample();
        nan_profit.total_profit = f64::NAN;
        assert!(!nan_profit.is_valid());
    }

    #[test]
    fn test_negative_profit_is_valid() {
        let mut record = sample();
        record.total_profit = -1250.75;
        assert!(record.is_valid());
    }

    #[test]
    fn test_fields_skip_order_id() {
        let record = sample();
        let fields = record.fields();

        assert_eq!(fields.len(), FIELD_COUNT - 1);
        assert!(fields.iter().all(|(label, _)| *label != "Order ID"));
        assert_eq!(fields[0], ("Region", FieldValue::Text("Sub-Saharan Africa")));
        assert_eq!(fields[7], ("Units Sold", FieldValue::Count(4484)));
        assert_eq!(fields[12], ("Total Profit", FieldValue::Money(566105.00)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.total_profit = 0.0;

        assert_eq!(original.total_profit, 566105.00);
        assert_ne!(original, copy);
    }
}
