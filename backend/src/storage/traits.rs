//! # Storage Traits
//!
//! Abstraction over the bill table so the defaulting store and the domain
//! layer can run against any backend, including failing test doubles.

use async_trait::async_trait;

use super::error::StorageError;
use crate::domain::models::bill::Bill;

/// Fallible bill storage operations.
///
/// All list operations return bills ordered by date descending.
#[async_trait]
pub trait BillStorage: Send + Sync {
    /// All stored bills
    async fn list_bills(&self) -> Result<Vec<Bill>, StorageError>;

    /// A single bill by ID
    async fn get_bill(&self, id: &str) -> Result<Option<Bill>, StorageError>;

    /// Insert a new bill. Fails if the ID already exists.
    async fn insert_bill(&self, bill: &Bill) -> Result<(), StorageError>;

    /// Overwrite every field but the ID. Returns the number of rows changed.
    async fn update_bill(&self, bill: &Bill) -> Result<u64, StorageError>;

    /// Returns the number of rows removed
    async fn delete_bill(&self, id: &str) -> Result<u64, StorageError>;

    /// Bills whose date falls within `[start, end]`, compared as strings
    async fn list_bills_in_range(&self, start: &str, end: &str) -> Result<Vec<Bill>, StorageError>;

    /// Bills whose status equals `status` exactly
    async fn list_bills_with_status(&self, status: &str) -> Result<Vec<Bill>, StorageError>;

    /// Sum of all amounts, zero when the table is empty
    async fn total_amount(&self) -> Result<f64, StorageError>;

    /// Bills where name, payer, description or status contains `query`
    async fn search_bills(&self, query: &str) -> Result<Vec<Bill>, StorageError>;

    /// Remove every bill. Returns the number of rows removed.
    async fn clear_bills(&self) -> Result<u64, StorageError>;
}

/// A storage connection that hands out bill repositories.
pub trait Connection: Send + Sync + Clone {
    type BillRepository: BillStorage + Clone;

    fn create_bill_repository(&self) -> Self::BillRepository;
}
