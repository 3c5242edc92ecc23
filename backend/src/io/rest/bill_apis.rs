//! # REST API for Bills
//!
//! Endpoints for listing, creating, updating, deleting and syncing bills.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::BillServiceError;
use crate::io::rest::mappers::bill_mapper::BillMapper;
use crate::AppState;
use shared::{
    Bill as SharedBill, BillListResponse, CreateBillRequest, DeleteBillResponse,
    SyncBillsResponse, TotalSpendingResponse, UpdateBillRequest,
};

#[derive(Debug, Deserialize)]
pub struct BillListQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn service_error_response(action: &str, e: BillServiceError) -> axum::response::Response {
    match e {
        BillServiceError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        err @ BillServiceError::StoreRejected(_) => {
            error!("Failed to {} bill: {}", action, err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// List bills, optionally filtered by `q`
pub async fn list_bills(
    State(state): State<AppState>,
    Query(query): Query<BillListQuery>,
) -> impl IntoResponse {
    info!("GET /api/bills - query: {:?}", query);

    let bills = state.bill_service.list_bills(query.q.as_deref()).await;
    (StatusCode::OK, Json(BillListResponse::from(BillMapper::to_dtos(bills))))
}

/// Create a new bill
pub async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> impl IntoResponse {
    info!("POST /api/bills - request: {:?}", request);

    match state.bill_service.create_bill(request).await {
        Ok(bill) => (StatusCode::CREATED, Json(BillMapper::to_dto(bill))).into_response(),
        Err(e) => service_error_response("add", e),
    }
}

pub async fn get_bill(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /api/bills/{}", id);

    match state.bill_service.get_bill(&id).await {
        Some(bill) => (StatusCode::OK, Json(BillMapper::to_dto(bill))).into_response(),
        None => (StatusCode::NOT_FOUND, "Bill not found").into_response(),
    }
}

pub async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBillRequest>,
) -> impl IntoResponse {
    info!("PUT /api/bills/{} - request: {:?}", id, request);

    match state.bill_service.update_bill(&id, request).await {
        Ok(bill) => (StatusCode::OK, Json(BillMapper::to_dto(bill))).into_response(),
        Err(e) => service_error_response("update", e),
    }
}

pub async fn delete_bill(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/bills/{}", id);

    if state.bill_service.delete_bill(&id).await {
        (
            StatusCode::OK,
            Json(DeleteBillResponse {
                success: true,
                message: "Bill deleted successfully".to_string(),
            }),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DeleteBillResponse {
                success: false,
                message: "Failed to delete bill".to_string(),
            }),
        )
    }
}

/// Bills dated between `start` and `end`, inclusive
pub async fn list_bills_in_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> impl IntoResponse {
    info!("GET /api/bills/range - {:?}", range);

    let bills = state.bill_service.bills_in_range(&range.start, &range.end).await;
    (StatusCode::OK, Json(BillListResponse::from(BillMapper::to_dtos(bills))))
}

pub async fn list_bills_with_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/bills/status/{}", status);

    let bills = state.bill_service.bills_with_status(&status).await;
    (StatusCode::OK, Json(BillListResponse::from(BillMapper::to_dtos(bills))))
}

/// Substring search done by the database
pub async fn search_bills(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    info!("GET /api/bills/search - q: {}", query.q);

    let bills = state.bill_service.search_bills(&query.q).await;
    (StatusCode::OK, Json(BillListResponse::from(BillMapper::to_dtos(bills))))
}

/// Replace all bills with the posted list
pub async fn sync_bills(
    State(state): State<AppState>,
    Json(bills): Json<Vec<SharedBill>>,
) -> impl IntoResponse {
    info!("POST /api/bills/sync - {} bills", bills.len());

    let bills = bills.into_iter().map(BillMapper::to_domain).collect();
    match state.bill_service.sync_bills(bills).await {
        Some(synced) => (StatusCode::OK, Json(SyncBillsResponse { success: true, synced })),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SyncBillsResponse {
                success: false,
                synced: 0,
            }),
        ),
    }
}

pub async fn get_total_spending(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/spending/total");

    let total = state.bill_service.total_spending().await;
    (StatusCode::OK, Json(TotalSpendingResponse { total }))
}
