//! Bill service domain logic for the bill tracker.
//!
//! Holds the non-visual behavior of the bill screens: validating and
//! creating new bills, filtering the list, deleting, and computing the
//! spending analysis. All storage goes through [`BillStore`], so nothing
//! here ever sees a storage error directly.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDateTime};
use shared::{AnalysisResponse, CreateBillRequest, FormattedPeriodTotals, UpdateBillRequest};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::bulk_source;
use crate::domain::models::bill::{is_iso_date, trimmed, Bill, BillValidationError, BILL_DATE_FORMAT};
use crate::domain::period_aggregator::period_totals;
use crate::storage::{BillStore, Connection};

#[derive(Debug, thiserror::Error)]
pub enum BillServiceError {
    #[error(transparent)]
    Validation(#[from] BillValidationError),
    #[error("Failed to {0} bill")]
    StoreRejected(&'static str),
}

#[derive(Clone)]
pub struct BillService<C: Connection> {
    store: BillStore<C::BillRepository>,
    currency_symbol: String,
}

impl<C: Connection> BillService<C> {
    pub fn new(connection: Arc<C>, currency_symbol: impl Into<String>) -> Self {
        Self {
            store: BillStore::new(connection.create_bill_repository()),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn store(&self) -> &BillStore<C::BillRepository> {
        &self.store
    }

    /// Validate the request and store it as a new bill with a fresh id
    pub async fn create_bill(&self, request: CreateBillRequest) -> Result<Bill, BillServiceError> {
        let amount = self.parse_amount(&request.amount)?;
        let date = match trimmed(request.date) {
            Some(date) => date,
            None => Local::now().date_naive().format(BILL_DATE_FORMAT).to_string(),
        };

        let bill = Bill {
            id: Bill::generate_id(),
            bill_name: request.bill_name.trim().to_string(),
            amount,
            date,
            status: trimmed(request.status),
            payer: trimmed(request.payer),
            description: trimmed(request.description),
        };
        Self::validate(&bill)?;

        if !self.store.add(&bill).await {
            return Err(BillServiceError::StoreRejected("add"));
        }

        info!("Added bill {} ({}) for {}", bill.id, bill.bill_name, self.format_amount(bill.amount));
        Ok(bill)
    }

    /// Replace every field of the bill with `id`.
    ///
    /// Like the store, this succeeds when no bill has that id.
    pub async fn update_bill(&self, id: &str, request: UpdateBillRequest) -> Result<Bill, BillServiceError> {
        let bill = Bill {
            id: id.to_string(),
            bill_name: request.bill_name.trim().to_string(),
            amount: request.amount,
            date: request.date.trim().to_string(),
            status: trimmed(request.status),
            payer: trimmed(request.payer),
            description: trimmed(request.description),
        };
        Self::validate(&bill)?;

        if !self.store.update(&bill).await {
            return Err(BillServiceError::StoreRejected("update"));
        }

        info!("Updated bill {}", bill.id);
        Ok(bill)
    }

    pub async fn delete_bill(&self, id: &str) -> bool {
        let deleted = self.store.delete(id).await;
        if deleted {
            info!("Deleted bill {}", id);
        }
        deleted
    }

    pub async fn get_bill(&self, id: &str) -> Option<Bill> {
        self.store.get_by_id(id).await
    }

    /// All bills, optionally narrowed by a case-insensitive search over
    /// name, payer, description and status. A blank query keeps everything.
    pub async fn list_bills(&self, query: Option<&str>) -> Vec<Bill> {
        let bills = self.store.get_all().await;

        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        if needle.is_empty() {
            return bills;
        }

        bills.into_iter().filter(|bill| bill.matches(&needle)).collect()
    }

    pub async fn bills_in_range(&self, start: &str, end: &str) -> Vec<Bill> {
        self.store.get_by_date_range(start, end).await
    }

    pub async fn bills_with_status(&self, status: &str) -> Vec<Bill> {
        self.store.get_by_status(status).await
    }

    pub async fn search_bills(&self, query: &str) -> Vec<Bill> {
        self.store.search(query).await
    }

    pub async fn total_spending(&self) -> f64 {
        self.store.get_total_spending().await
    }

    /// Spending totals for the windows ending at `now`
    pub async fn analysis(&self, now: NaiveDateTime) -> AnalysisResponse {
        let bills = self.store.get_all().await;
        let totals = period_totals(&bills, now);

        AnalysisResponse {
            formatted: FormattedPeriodTotals {
                week: self.format_amount(totals.week_total),
                month: self.format_amount(totals.month_total),
                quarter: self.format_amount(totals.quarter_total),
                year: self.format_amount(totals.year_total),
            },
            totals,
        }
    }

    /// Replace all stored bills. `None` if the table could not be cleared.
    ///
    /// Bills that would fail `create_bill` validation are skipped.
    pub async fn sync_bills(&self, bills: Vec<Bill>) -> Option<usize> {
        let total = bills.len();
        let valid: Vec<Bill> = bills
            .into_iter()
            .filter(|bill| match Self::validate(bill) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipped invalid bill {} during sync: {}", bill.id, e);
                    false
                }
            })
            .collect();

        if valid.len() < total {
            info!("Dropped {} of {} bills that failed validation", total - valid.len(), total);
        }
        self.store.sync_from_bulk_source(&valid).await
    }

    /// Replace all stored bills with the contents of a JSON bill file
    pub async fn sync_from_file(&self, path: &Path) -> Result<usize> {
        let bills = bulk_source::load_bills(path).await?;
        self.sync_bills(bills)
            .await
            .ok_or_else(|| anyhow!("Failed to sync bills from {}", path.display()))
    }

    /// Parse an amount typed into a form field, e.g. "₹1,250.50"
    pub fn parse_amount(&self, input: &str) -> Result<f64, BillValidationError> {
        let cleaned = input
            .trim()
            .replace(&self.currency_symbol, "")
            .replace([',', ' '], "");

        if cleaned.is_empty() {
            return Err(BillValidationError::InvalidAmount("amount is empty".to_string()));
        }

        let amount = cleaned
            .parse::<f64>()
            .map_err(|e| BillValidationError::InvalidAmount(e.to_string()))?;
        Self::validate_amount(amount)?;
        Ok(amount)
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    fn validate(bill: &Bill) -> Result<(), BillValidationError> {
        if bill.bill_name.is_empty() {
            return Err(BillValidationError::EmptyName);
        }
        Self::validate_amount(bill.amount)?;
        if !is_iso_date(&bill.date) {
            return Err(BillValidationError::InvalidDate(bill.date.clone()));
        }
        Ok(())
    }

    fn validate_amount(amount: f64) -> Result<(), BillValidationError> {
        if !amount.is_finite() {
            return Err(BillValidationError::InvalidAmount(amount.to_string()));
        }
        if amount < 0.0 {
            return Err(BillValidationError::NegativeAmount);
        }
        Ok(())
    }
}
