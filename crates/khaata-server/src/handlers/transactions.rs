//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{AppError, AppState, SuccessResponse, MAX_PAGE_LIMIT};
use khaata_core::models::{NewTransaction, Transaction, TxKind};
use khaata_core::sms::parse_sms;

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub transactions: Vec<Transaction>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GET /api/transactions - List transactions newest-first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Result<Json<TransactionResponse>, AppError> {
    // Input validation: clamp pagination parameters
    let limit = params.limit.max(1).min(MAX_PAGE_LIMIT);
    let offset = params.offset.max(0);

    let transactions = state.db.list_transactions(limit, offset)?;
    let total = state.db.count_transactions()?;

    Ok(Json(TransactionResponse {
        transactions,
        total,
        limit,
        offset,
    }))
}

/// Request body for recording a transaction
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    pub kind: String,
    pub category: String,
    /// YYYY-MM-DD
    pub date: String,
}

/// POST /api/transactions - Record a transaction
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let kind: TxKind = req
        .kind
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let date = NaiveDate::parse_from_str(&req.date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Invalid date format (use YYYY-MM-DD)"))?;

    let category = req.category.trim();
    if category.is_empty() {
        return Err(AppError::bad_request("Category cannot be empty"));
    }

    let new_tx = NewTransaction::manual(req.amount, kind, category, date);
    let id = state
        .db
        .insert_transaction(&new_tx)?
        .expect("manual entries carry no dedup hash");

    let tx = state
        .db
        .get_transaction(id)?
        .ok_or_else(|| AppError::not_found("Transaction vanished after insert"))?;

    // Fire-and-forget: notification failure never rolls back the mutation
    if let Err(e) = state.notifier.notify_transaction(&tx) {
        warn!(error = %e, "Failed to send transaction notification");
    }

    Ok(Json(tx))
}

/// DELETE /api/transactions/:id - Delete a transaction
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_transaction(id)?;

    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub cleared: usize,
}

/// POST /api/transactions/reset - Bulk reset of the ledger
pub async fn reset_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetResponse>, AppError> {
    let cleared = state.db.clear_transactions()?;

    Ok(Json(ResetResponse {
        success: true,
        cleared,
    }))
}

/// Request body for recording a transaction from a bank SMS
#[derive(Debug, Deserialize)]
pub struct SmsTransactionRequest {
    pub message: String,
    /// Category for the recorded transaction (defaults to "SMS Import")
    pub category: Option<String>,
}

/// POST /api/transactions/sms - Parse a bank SMS and record the transaction
pub async fn create_transaction_from_sms(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SmsTransactionRequest>,
) -> Result<Json<Transaction>, AppError> {
    let today = Utc::now().date_naive();
    let draft = parse_sms(&req.message, today)?;

    let category = req.category.as_deref().unwrap_or("SMS Import");
    let new_tx = draft.into_transaction(category);

    let id = state
        .db
        .insert_transaction(&new_tx)?
        .ok_or_else(|| AppError::conflict("This SMS was already recorded"))?;

    let tx = state
        .db
        .get_transaction(id)?
        .ok_or_else(|| AppError::not_found("Transaction vanished after insert"))?;

    if let Err(e) = state.notifier.notify_transaction(&tx) {
        warn!(error = %e, "Failed to send transaction notification");
    }

    Ok(Json(tx))
}
