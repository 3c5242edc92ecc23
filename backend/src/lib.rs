//! # Bill Tracker Backend
//!
//! Everything below the UI for the bill tracker:
//!
//! ```text
//! UI (frontend)
//!     ↓
//! IO Layer (REST API, DTO mappers)
//!     ↓
//! Domain Layer (bill service, period aggregation)
//!     ↓
//! Storage Layer (SQLite bills table)
//! ```
//!
//! The database connection is created once in [`initialize_backend`] and
//! handed to the services; there is no global handle.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::domain::BillService;
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub bill_service: BillService<DbConnection>,
}

/// Open the database and build the services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = Arc::new(DbConnection::new(&config.database_url).await?);

    info!("Setting up domain model");
    let bill_service = BillService::new(db_conn, config.currency_symbol.clone());

    Ok(AppState { bill_service })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/bills", get(io::list_bills).post(io::create_bill))
        .route("/bills/range", get(io::list_bills_in_range))
        .route("/bills/search", get(io::search_bills))
        .route("/bills/sync", post(io::sync_bills))
        .route("/bills/status/:status", get(io::list_bills_with_status))
        .route(
            "/bills/:id",
            get(io::get_bill).put(io::update_bill).delete(io::delete_bill),
        )
        .route("/spending/total", get(io::get_total_spending))
        .route("/analysis", get(io::get_analysis));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
