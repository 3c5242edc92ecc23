use serde::{Deserialize, Serialize};

/// A single tracked bill as exchanged with the frontend.
///
/// Field names keep the camelCase form used by the bill JSON files
/// (`billName`), so the same type reads a bulk-source file directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub bill_name: String,
    pub amount: f64,
    /// Calendar date in YYYY-MM-DD form
    pub date: String,
    /// Free-text tag, usually "due", "paid" or "pending"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub bill_name: String,
    /// Amount as typed into the form, e.g. "1,250.50" or "₹42"
    pub amount: String,
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full replacement of a bill's fields; the id comes from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillRequest {
    pub bill_name: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillListResponse {
    pub bills: Vec<Bill>,
    pub count: usize,
}

impl From<Vec<Bill>> for BillListResponse {
    fn from(bills: Vec<Bill>) -> Self {
        Self {
            count: bills.len(),
            bills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteBillResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncBillsResponse {
    pub success: bool,
    pub synced: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalSpendingResponse {
    pub total: f64,
}

/// Week-, month-, quarter- and year-to-date spending
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub week_total: f64,
    pub month_total: f64,
    pub quarter_total: f64,
    pub year_total: f64,
}

/// Period totals formatted for display, e.g. "₹12.50"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPeriodTotals {
    pub week: String,
    pub month: String,
    pub quarter: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub totals: PeriodTotals,
    pub formatted: FormattedPeriodTotals,
}
