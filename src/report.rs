//! Text rendering of query results.
//!
//! Everything here returns `String`s; printing is left to the caller.
//! Money is rounded to two decimal places through `Decimal`, half away
//! from zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::analytics::{GroupTotal, ProfitSummary, RankedGroup};
use crate::types::{FieldValue, SalesRecord};

/// Width of the label column in record details
const LABEL_WIDTH: usize = 18;

/// Format a money value with two decimals, e.g. `1234.50`
pub fn money(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => format!("{value:.2}"),
    }
}

/// Labelled detail block for one record.
///
/// The order ID line is included only when `with_order_id` is set.
pub fn record_details(record: &SalesRecord, with_order_id: bool) -> String {
    let mut out = String::new();
    if with_order_id {
        out.push_str(&format!("{:<LABEL_WIDTH$}{}\n", "Order ID:", record.order_id));
    }
    out.push_str("\n--- Order Details ---\n");

    for (label, value) in record.fields() {
        let label = format!("{label}:");
        let value = match value {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Count(count) => count.to_string(),
            FieldValue::Money(amount) => format!("${}", money(amount)),
        };
        out.push_str(&format!("{label:<LABEL_WIDTH$}{value}\n"));
    }
    out
}

/// `Name: $amount` lines under a heading
pub fn group_totals(title: &str, totals: &[GroupTotal]) -> String {
    let mut out = format!("\n--- {title} ---\n");
    for group in totals {
        out.push_str(&format!("{}: ${}\n", group.key, money(group.total_profit)));
    }
    out
}

/// `rank. Name: $amount` lines under a "Top N" heading
pub fn ranked_items(requested: usize, items: &[RankedGroup]) -> String {
    let mut out = format!("\n--- Top {requested} Performing Items ---\n");
    for item in items {
        out.push_str(&format!("{}. {}: ${}\n", item.rank, item.key, money(item.total_profit)));
    }
    out
}

pub fn summary(summary: &ProfitSummary) -> String {
    format!(
        "\n--- Dataset Summary ---\n\
         Records:          {}\n\
         Units Sold:       {}\n\
         Total Revenue:    ${}\n\
         Total Cost:       ${}\n\
         Total Profit:     ${}\n",
        summary.record_count,
        summary.units_sold,
        money(summary.total_revenue),
        money(summary.total_cost),
        money(summary.total_profit),
    )
}

// ============================================================================
// Unit Tests
// ============================================================================
