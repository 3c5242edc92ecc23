use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::bill::{non_empty, Bill};
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageError;
use crate::storage::traits::BillStorage;

const SELECT_BILLS: &str =
    "SELECT id, billName, amount, date, status, payer, description FROM bills";

const ORDER_BY_DATE: &str = "ORDER BY date DESC, id ASC";

/// Repository for bill operations
#[derive(Clone)]
pub struct BillRepository {
    db: DbConnection,
}

impl BillRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn bill_from_row(row: &SqliteRow) -> Result<Bill, sqlx::Error> {
        Ok(Bill {
            id: row.try_get("id")?,
            bill_name: row.try_get("billName")?,
            amount: row.try_get("amount")?,
            date: row.try_get("date")?,
            status: non_empty(row.try_get("status")?),
            payer: non_empty(row.try_get("payer")?),
            description: non_empty(row.try_get("description")?),
        })
    }

    fn bills_from_rows(rows: &[SqliteRow]) -> Result<Vec<Bill>, StorageError> {
        rows.iter()
            .map(|row| Self::bill_from_row(row).map_err(StorageError::from))
            .collect()
    }

    /// Build a LIKE pattern that matches `query` literally anywhere in a column
    fn contains_pattern(query: &str) -> String {
        let escaped = query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }
}

#[async_trait]
impl BillStorage for BillRepository {
    async fn list_bills(&self) -> Result<Vec<Bill>, StorageError> {
        let rows = sqlx::query(&format!("{} {}", SELECT_BILLS, ORDER_BY_DATE))
            .fetch_all(self.db.pool())
            .await?;

        Self::bills_from_rows(&rows)
    }

    async fn get_bill(&self, id: &str) -> Result<Option<Bill>, StorageError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_BILLS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::bill_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn insert_bill(&self, bill: &Bill) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO bills (id, billName, amount, date, status, payer, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&bill.id)
        .bind(&bill.bill_name)
        .bind(bill.amount)
        .bind(&bill.date)
        .bind(bill.status.as_deref().unwrap_or(""))
        .bind(bill.payer.as_deref().unwrap_or(""))
        .bind(bill.description.as_deref().unwrap_or(""))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn update_bill(&self, bill: &Bill) -> Result<u64, StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE bills
            SET billName = ?, amount = ?, date = ?, status = ?, payer = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&bill.bill_name)
        .bind(bill.amount)
        .bind(&bill.date)
        .bind(bill.status.as_deref().unwrap_or(""))
        .bind(bill.payer.as_deref().unwrap_or(""))
        .bind(bill.description.as_deref().unwrap_or(""))
        .bind(&bill.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_bill(&self, id: &str) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM bills WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_bills_in_range(&self, start: &str, end: &str) -> Result<Vec<Bill>, StorageError> {
        let rows = sqlx::query(&format!(
            "{} WHERE date >= ? AND date <= ? {}",
            SELECT_BILLS, ORDER_BY_DATE
        ))
        .bind(start)
        .bind(end)
        .fetch_all(self.db.pool())
        .await?;

        Self::bills_from_rows(&rows)
    }

    async fn list_bills_with_status(&self, status: &str) -> Result<Vec<Bill>, StorageError> {
        let rows = sqlx::query(&format!("{} WHERE status = ? {}", SELECT_BILLS, ORDER_BY_DATE))
            .bind(status)
            .fetch_all(self.db.pool())
            .await?;

        Self::bills_from_rows(&rows)
    }

    async fn total_amount(&self) -> Result<f64, StorageError> {
        let total: Option<f64> = sqlx::query_scalar("SELECT SUM(amount) FROM bills")
            .fetch_one(self.db.pool())
            .await?;

        Ok(total.unwrap_or(0.0))
    }

    async fn search_bills(&self, query: &str) -> Result<Vec<Bill>, StorageError> {
        let pattern = Self::contains_pattern(query);
        let rows = sqlx::query(&format!(
            r#"{} WHERE billName LIKE ? ESCAPE '\'
                OR payer LIKE ? ESCAPE '\'
                OR description LIKE ? ESCAPE '\'
                OR status LIKE ? ESCAPE '\'
            {}"#,
            SELECT_BILLS, ORDER_BY_DATE
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.db.pool())
        .await?;

        Self::bills_from_rows(&rows)
    }

    async fn clear_bills(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM bills")
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
