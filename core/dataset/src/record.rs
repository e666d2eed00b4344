//! FILENAME: core/dataset/src/record.rs
//! PURPOSE: The sales transaction record and its external column schema.
//! CONTEXT: Every loader produces these records and every derived table is
//! computed from them. The column names are an external contract: sources
//! must carry them exactly, case-sensitively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// EXTERNAL COLUMN SCHEMA
// ============================================================================

/// Exact, case-sensitive column names of the tabular source schema.
pub mod columns {
    pub const ORDER_DATE: &str = "Order Date";
    pub const REGION: &str = "Region";
    pub const STATE: &str = "State";
    pub const CITY: &str = "City";
    pub const CATEGORY: &str = "Category";
    pub const SUB_CATEGORY: &str = "Sub-Category";
    pub const SEGMENT: &str = "Segment";
    pub const SALES: &str = "Sales";
    pub const PROFIT: &str = "Profit";
    pub const QUANTITY: &str = "Quantity";

    /// All required columns, in schema order.
    pub const ALL: [&str; 10] = [
        ORDER_DATE,
        REGION,
        STATE,
        CITY,
        CATEGORY,
        SUB_CATEGORY,
        SEGMENT,
        SALES,
        PROFIT,
        QUANTITY,
    ];
}

// ============================================================================
// RECORD
// ============================================================================

/// One sales transaction.
///
/// `region`/`state`/`city` form a containment hierarchy by convention only;
/// nothing here enforces it, and filtering treats the three independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub order_date: NaiveDate,
    pub region: String,
    pub state: String,
    pub city: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: u32,
}
