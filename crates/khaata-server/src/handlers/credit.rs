//! Credit overview handler

use axum::Json;

use khaata_core::credit::{credit_report, CreditReport};

/// GET /api/credit - Static credit score overview
pub async fn get_credit() -> Json<CreditReport> {
    Json(credit_report())
}
