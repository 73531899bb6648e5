//! Core data types for sales-index
//!
//! ## Types
//!
//! - [`SalesRecord`]: One row of the sales table
//! - [`FieldValue`]: A record field prepared for display
//!
//! ## Schema
//!
//! [`COLUMNS`] lists the 14 input columns in file order.

mod record;

pub use record::{FieldValue, SalesRecord, COLUMNS, FIELD_COUNT};
