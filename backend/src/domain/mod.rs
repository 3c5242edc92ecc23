//! # Domain Module
//!
//! Business logic for the bill tracker, independent of storage and of how
//! the frontend talks to us.
//!
//! - **models**: the domain `Bill` and its validation rules
//! - **bill_service**: adding, updating, listing and deleting bills, plus
//!   the spending analysis and bulk sync
//! - **period_aggregator**: week/month/quarter/year-to-date totals
//! - **bulk_source**: reading bill lists from JSON files

pub mod bill_service;
pub mod bulk_source;
pub mod models;
pub mod period_aggregator;

pub use bill_service::{BillService, BillServiceError};
pub use period_aggregator::{period_totals, PeriodWindows};
