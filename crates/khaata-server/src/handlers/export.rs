//! Export handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
};

use crate::{AppError, AppState};
use khaata_core::export::export_transactions_csv;

/// GET /api/export/transactions - Download the ledger as CSV
pub async fn export_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<(HeaderMap, String), AppError> {
    let mut buf = Vec::new();
    export_transactions_csv(&state.db, &mut buf)?;

    let body = String::from_utf8(buf)
        .map_err(|_| AppError::bad_request("Export produced invalid UTF-8"))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"transactions.csv\""),
    );

    Ok((headers, body))
}
