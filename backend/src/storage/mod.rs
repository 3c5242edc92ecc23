//! # Storage Module
//!
//! Persistence for bills. Everything lives in a single `bills` table in a
//! local SQLite file.
//!
//! The module is split in two layers:
//!
//! - **BillStorage / BillRepository**: the SQL layer. Every call can fail
//!   with a [`StorageError`].
//! - **BillStore**: the adapter the rest of the backend talks to. It turns
//!   storage failures into safe defaults (empty list, `false`, zero,
//!   not found) and logs them, so callers never see a storage error.

pub mod bill_store;
pub mod connection;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use bill_store::BillStore;
pub use connection::DbConnection;
pub use error::StorageError;
pub use sqlite::BillRepository;
pub use traits::{BillStorage, Connection};
