use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One synthesized sale. Immutable once produced; `revenue` is always
/// `round_cents(unit_price * quantity)` and is computed exactly once at
/// assembly time, never re-derived downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub revenue: f64,
    pub store_name: String,
    /// Empty string means no campaign applied to this sale.
    pub campaign: String,
}

/// Rounds a monetary amount to 2 decimals, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
