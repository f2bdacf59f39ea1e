use serde::{Deserialize, Serialize};

/// A priced line ready to go on an invoice. `amount_cents` is fixed when the
/// item is created and does not follow later rate changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub invoice_item_id: String,
    pub tenant_id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub description: String,
    pub minutes: u64,
    pub hourly_rate_cents: i64,
    pub amount_cents: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillableLine {
    pub project_id: String,
    pub minutes: u64,
    pub decimal_hours: String,
    pub hourly_rate_cents: i64,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    pub user_id: String,
    /// First and last day of the range, as `YYYY-MM-DD`.
    pub from: String,
    pub to: String,
    pub lines: Vec<BillableLine>,
    pub total_minutes: u64,
    pub total_decimal_hours: String,
    pub total_amount_cents: i64,
}
