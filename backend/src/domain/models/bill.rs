use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Date format used for storage, sorting and range comparison
pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: String,
    pub bill_name: String,
    pub amount: f64,
    pub date: String,
    pub status: Option<String>,
    pub payer: Option<String>,
    pub description: Option<String>,
}

impl Bill {
    /// Fresh identifier for a new bill
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Local instant of the bill, if its date can be read
    pub fn parsed_at(&self) -> Option<NaiveDateTime> {
        parse_bill_date(&self.date)
    }

    /// Case-insensitive match against name, payer, description and status.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(needle))
        };

        contains(Some(self.bill_name.as_str()))
            || contains(self.payer.as_deref())
            || contains(self.description.as_deref())
            || contains(self.status.as_deref())
    }
}

impl From<shared::Bill> for Bill {
    fn from(dto: shared::Bill) -> Self {
        Self {
            id: dto.id,
            bill_name: dto.bill_name,
            amount: dto.amount,
            date: dto.date,
            status: non_empty(dto.status),
            payer: non_empty(dto.payer),
            description: non_empty(dto.description),
        }
    }
}

/// Read a bill date as a local instant.
///
/// `YYYY-MM-DD` is midnight of that day. An RFC 3339 timestamp keeps its
/// time of day, converted to local time.
pub fn parse_bill_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, BILL_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// True for a zero-padded `YYYY-MM-DD` date that exists on the calendar
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, BILL_DATE_FORMAT).is_ok()
}

/// Empty text becomes `None`
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Trim an optional form field; blank becomes `None`
pub fn trimmed(value: Option<String>) -> Option<String> {
    non_empty(value.map(|v| v.trim().to_string()))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillValidationError {
    #[error("Please enter a bill name")]
    EmptyName,
    #[error("Please enter a valid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Date must be a valid YYYY-MM-DD date, got '{0}'")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill() -> Bill {
        Bill {
            id: Bill::generate_id(),
            bill_name: "Electricity Bill".to_string(),
            amount: 75.0,
            date: "2024-06-01".to_string(),
            status: Some("Pending".to_string()),
            payer: Some("Alex".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(Bill::generate_id(), Bill::generate_id());
    }

    #[test]
    fn test_matches_is_case_insensitive_across_fields() {
        let b = bill();
        assert!(b.matches("electricity"));
        assert!(b.matches("alex"));
        assert!(b.matches("pend"));
        assert!(!b.matches("water"));
        assert!(b.matches(""));
    }

    #[test]
    fn test_parse_bill_date() {
        let midnight = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0);
        assert_eq!(parse_bill_date("2024-06-01"), midnight);
        assert_eq!(parse_bill_date(" 2024-06-01 "), midnight);
        assert!(parse_bill_date("2024-06-01T12:00:00+00:00").is_some());
        assert_eq!(parse_bill_date("not a date"), None);
        assert_eq!(parse_bill_date("2024-02-30"), None);
        assert_eq!(parse_bill_date(""), None);
    }

    #[test]
    fn test_timestamp_keeps_time_of_day() {
        let local = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(15, 45, 0).unwrap();
        let stamp = local
            .and_local_timezone(Local)
            .earliest()
            .unwrap()
            .to_rfc3339();

        assert_eq!(parse_bill_date(&stamp), Some(local));
    }

    #[test]
    fn test_from_shared_bill_drops_empty_optionals() {
        let bill = Bill::from(shared::Bill {
            id: "s1".to_string(),
            bill_name: "Streaming".to_string(),
            amount: 9.99,
            date: "2024-02-14".to_string(),
            status: Some(String::new()),
            payer: Some("Jo".to_string()),
            description: None,
        });

        assert_eq!(bill.status, None);
        assert_eq!(bill.payer.as_deref(), Some("Jo"));
    }

    #[test]
    fn test_is_iso_date_requires_zero_padding() {
        assert!(is_iso_date("2024-01-05"));
        assert!(!is_iso_date("2024-1-5"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("05/01/2024"));
    }

    #[test]
    fn test_optional_text_helpers() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" x ".to_string())), Some(" x ".to_string()));
        assert_eq!(trimmed(Some("  paid ".to_string())), Some("paid".to_string()));
        assert_eq!(trimmed(Some("   ".to_string())), None);
        assert_eq!(trimmed(None), None);
    }
}
