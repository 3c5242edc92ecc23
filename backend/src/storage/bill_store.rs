//! Failure-to-default adapter over [`BillStorage`].
//!
//! Callers have no recovery path for a storage failure beyond telling the
//! user, so every operation here logs the error and returns a safe default.
//! Reads cannot tell "empty" from "failed"; writes report `false`.

use tracing::{debug, error, info, warn};

use super::traits::BillStorage;
use crate::domain::models::bill::Bill;

#[derive(Clone)]
pub struct BillStore<S: BillStorage> {
    storage: S,
}

impl<S: BillStorage> BillStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The fallible layer underneath
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All bills, newest date first. Empty on failure.
    pub async fn get_all(&self) -> Vec<Bill> {
        match self.storage.list_bills().await {
            Ok(bills) => bills,
            Err(e) => {
                error!("Error fetching bills: {}", e);
                Vec::new()
            }
        }
    }

    /// `None` both when the bill does not exist and on failure
    pub async fn get_by_id(&self, id: &str) -> Option<Bill> {
        match self.storage.get_bill(id).await {
            Ok(bill) => bill,
            Err(e) => {
                error!("Error fetching bill {}: {}", id, e);
                None
            }
        }
    }

    pub async fn add(&self, bill: &Bill) -> bool {
        match self.storage.insert_bill(bill).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error adding bill {}: {}", bill.id, e);
                false
            }
        }
    }

    /// Succeeds even when no bill has the given id
    pub async fn update(&self, bill: &Bill) -> bool {
        match self.storage.update_bill(bill).await {
            Ok(rows) => {
                if rows == 0 {
                    debug!("Update matched no bill with id {}", bill.id);
                }
                true
            }
            Err(e) => {
                error!("Error updating bill {}: {}", bill.id, e);
                false
            }
        }
    }

    /// Succeeds even when no bill has the given id
    pub async fn delete(&self, id: &str) -> bool {
        match self.storage.delete_bill(id).await {
            Ok(rows) => {
                if rows == 0 {
                    debug!("Delete matched no bill with id {}", id);
                }
                true
            }
            Err(e) => {
                error!("Error deleting bill {}: {}", id, e);
                false
            }
        }
    }

    /// Bills dated within `[start, end]` (inclusive, `YYYY-MM-DD`)
    pub async fn get_by_date_range(&self, start: &str, end: &str) -> Vec<Bill> {
        match self.storage.list_bills_in_range(start, end).await {
            Ok(bills) => bills,
            Err(e) => {
                error!("Error fetching bills by date range {}..{}: {}", start, end, e);
                Vec::new()
            }
        }
    }

    pub async fn get_by_status(&self, status: &str) -> Vec<Bill> {
        match self.storage.list_bills_with_status(status).await {
            Ok(bills) => bills,
            Err(e) => {
                error!("Error fetching bills by status {}: {}", status, e);
                Vec::new()
            }
        }
    }

    pub async fn get_total_spending(&self) -> f64 {
        match self.storage.total_amount().await {
            Ok(total) => total,
            Err(e) => {
                error!("Error calculating total: {}", e);
                0.0
            }
        }
    }

    pub async fn search(&self, query: &str) -> Vec<Bill> {
        match self.storage.search_bills(query).await {
            Ok(bills) => bills,
            Err(e) => {
                error!("Error searching bills for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    /// Replace the table contents with `bills`.
    ///
    /// Not transactional: the table is cleared first, then each bill is added
    /// in order. Bills that fail to insert are skipped. Returns the number
    /// inserted, or `None` if the table could not be cleared.
    pub async fn sync_from_bulk_source(&self, bills: &[Bill]) -> Option<usize> {
        match self.storage.clear_bills().await {
            Ok(removed) => debug!("Cleared {} bills before sync", removed),
            Err(e) => {
                error!("Error syncing bills: {}", e);
                return None;
            }
        }

        let mut inserted = 0;
        for bill in bills {
            if self.add(bill).await {
                inserted += 1;
            } else {
                warn!("Skipped bill {} during sync", bill.id);
            }
        }

        info!("Synced {} of {} bills to database", inserted, bills.len());
        Some(inserted)
    }
}
