//! Delimited-text loader for sales records.
//!
//! This module turns raw rows into validated [`SalesRecord`]s. The stores
//! never see text: every record handed to them has a non-empty order ID and
//! already-converted numeric fields.
//!
//! # Validation
//!
//! A row is rejected as `MalformedRecord` when:
//! - it does not split into exactly 14 fields
//! - the order ID is empty after trimming
//! - units sold is not a non-negative integer
//! - a money column is not a plain decimal number
//!
//! Money columns are parsed with `rust_decimal` first, so inputs such as
//! `NaN`, `inf` or `1e9` are refused instead of becoming odd floats.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use sales_index::loader::{load_reader, LoaderConfig};
//!
//! let csv = "Region,Country,Item Type,Sales Channel,Order Priority,Order Date,\
//! Order ID,Ship Date,Units Sold,Unit Price,Unit Cost,Total Revenue,Total Cost,Total Profit
//! Europe,Norway,Cereal,Online,H,1/2/2015,100200300,1/9/2015,10,205.70,117.11,2057.00,1171.10,885.90
//! ";
//!
//! let outcome = load_reader(Cursor::new(csv), &LoaderConfig::default()).unwrap();
//! assert_eq!(outcome.records.len(), 1);
//! assert_eq!(outcome.records[0].order_id, "100200300");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{Result, SalesError};
use crate::types::{SalesRecord, FIELD_COUNT};

// ============================================================================
// Configuration
// ============================================================================

/// Loader options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// First line is a header row and is skipped
    pub has_header: bool,

    /// Log and skip malformed rows instead of failing the load
    pub skip_invalid: bool,

    /// Field separator
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            skip_invalid: true,
            delimiter: ',',
        }
    }
}

impl LoaderConfig {
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Enable skipping rows that fail validation.
    ///
    /// When disabled, the first malformed row aborts the load.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

// ============================================================================
// Results
// ============================================================================

/// Statistics for one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data lines examined (header and blank lines excluded)
    pub lines_read: usize,

    /// Records that passed validation
    pub records_loaded: usize,

    /// Rows rejected and skipped
    pub lines_skipped: usize,
}

/// Records produced by a load plus its statistics.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub records: Vec<SalesRecord>,
    pub stats: LoadStats,
}

// ============================================================================
// Row Parsing
// ============================================================================

/// Parse one data row.
///
/// # Arguments
///
/// * `line` - Raw row text, without the line terminator
/// * `line_no` - 1-based line number, used in error messages
/// * `delimiter` - Field separator
pub fn parse_line(line: &str, line_no: usize, delimiter: char) -> Result<SalesRecord> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(SalesError::malformed(
            line_no,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    }

    let order_id = fields[6];
    if order_id.is_empty() {
        return Err(SalesError::malformed(line_no, "empty order ID"));
    }

    let units_sold = fields[8].parse::<u32>().map_err(|_| {
        SalesError::malformed(line_no, format!("invalid units sold: {:?}", fields[8]))
    })?;

    let money = |index: usize, column: &str| parse_money(fields[index], line_no, column);

    Ok(SalesRecord {
        region: fields[0].to_string(),
        country: fields[1].to_string(),
        item_type: fields[2].to_string(),
        sales_channel: fields[3].to_string(),
        order_priority: fields[4].to_string(),
        order_date: fields[5].to_string(),
        order_id: order_id.to_string(),
        ship_date: fields[7].to_string(),
        units_sold,
        unit_price: money(9, "unit price")?,
        unit_cost: money(10, "unit cost")?,
        total_revenue: money(11, "total revenue")?,
        total_cost: money(12, "total cost")?,
        total_profit: money(13, "total profit")?,
    })
}

/// Parse a money column through `Decimal`, then widen to `f64`
fn parse_money(raw: &str, line_no: usize, column: &str) -> Result<f64> {
    Decimal::from_str(raw)
        .ok()
        .and_then(|d| d.to_f64())
        .filter(|v| v.is_finite())
        .ok_or_else(|| SalesError::malformed(line_no, format!("invalid {column}: {raw:?}")))
}

// ============================================================================
// Loading
// ============================================================================

/// Read every row from `reader`.
///
/// Blank lines are ignored. Malformed rows, including rows that are not
/// valid UTF-8, are logged and skipped when `config.skip_invalid` is set;
/// otherwise the first one is returned as an error. Only a failing read
/// ends the load with `Io`.
pub fn load_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();
    let mut lines = reader.split(b'\n').enumerate();

    if config.has_header {
        match lines.next() {
            Some((_, header)) => {
                let header = header.map_err(|e| SalesError::io("<input>", e))?;
                debug!("Skipping header: {}", String::from_utf8_lossy(&header).trim_end());
            }
            None => return Err(SalesError::MissingHeader),
        }
    }

    for (index, bytes) in lines {
        let bytes = bytes.map_err(|e| SalesError::io("<input>", e))?;
        let line_no = index + 1;

        let parsed = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_line(&line, line_no, config.delimiter),
            Err(e) => Err(SalesError::malformed(
                line_no,
                format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
            )),
        };
        outcome.stats.lines_read += 1;

        match parsed {
            Ok(record) => {
                outcome.records.push(record);
                outcome.stats.records_loaded += 1;
            }
            Err(e) if config.skip_invalid => {
                warn!("Skipping row: {e}");
                outcome.stats.lines_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}

/// Open `path` and load it with [`load_reader`].
pub fn load_path<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<LoadOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SalesError::io(path, e))?;

    let outcome = load_reader(BufReader::new(file), config).map_err(|e| match e {
        SalesError::Io { source, .. } => SalesError::io(path, source),
        other => other,
    })?;

    info!(
        "Loaded {} records from {} ({} skipped)",
        outcome.stats.records_loaded,
        path.display(),
        outcome.stats.lines_skipped
    );

    Ok(outcome)
}

/// Clean up a path typed by a user.
///
/// Trims whitespace and strips one pair of matching surrounding quotes,
/// as left behind by drag-and-drop into a terminal.
pub fn normalize_path_input(raw: &str) -> String {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
