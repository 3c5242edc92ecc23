//! SQLite implementations of the storage traits.

pub mod bill_repository;

pub use bill_repository::BillRepository;
