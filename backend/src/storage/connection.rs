use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

use super::sqlite::BillRepository;
use super::traits::Connection;

/// The database URL used when none is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:bills.db";

/// DbConnection owns the SQLite pool and the bills schema
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and ensure the schema exists
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // A single long-lived connection: calls are served in issue order
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await?;

        Self::setup_schema(&pool).await?;
        info!("Bill database ready at {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Every later query fails.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bills (
                id TEXT PRIMARY KEY,
                billName TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                status TEXT,
                payer TEXT,
                description TEXT
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type BillRepository = BillRepository;

    fn create_bill_repository(&self) -> Self::BillRepository {
        BillRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::bill::Bill;
    use crate::storage::BillStorage;
    use tempfile::TempDir;

    fn sample_bill() -> Bill {
        Bill {
            id: "bill-1".to_string(),
            bill_name: "Water".to_string(),
            amount: 18.75,
            date: "2024-04-02".to_string(),
            status: Some("paid".to_string()),
            payer: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        DbConnection::setup_schema(db.pool()).await.expect("Second schema setup failed");
        DbConnection::setup_schema(db.pool()).await.expect("Third schema setup failed");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(db.pool())
            .await
            .expect("bills table missing");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_reopening_file_database_keeps_bills() {
        let temp_dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", temp_dir.path().join("bills.db").display());

        let first = DbConnection::new(&url).await.expect("Failed to create database file");
        first
            .create_bill_repository()
            .insert_bill(&sample_bill())
            .await
            .expect("Failed to insert bill");
        first.close().await;

        let second = DbConnection::new(&url).await.expect("Failed to reopen database file");
        let stored = second
            .create_bill_repository()
            .get_bill("bill-1")
            .await
            .expect("Query failed");
        assert_eq!(stored, Some(sample_bill()));
    }

    #[tokio::test]
    async fn test_closed_connection_rejects_queries() {
        let db = DbConnection::init_test().await.unwrap();
        db.close().await;

        let result = db.create_bill_repository().list_bills().await;
        assert!(result.is_err());
    }
}
