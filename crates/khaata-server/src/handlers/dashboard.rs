//! Dashboard, monthly report, and forecast handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{AppError, AppState};
use khaata_core::engine::{aggregate_by_month, dashboard_stats, predict_next_period, LedgerSnapshot};
use khaata_core::models::{DashboardStats, MonthlyBucket, Prediction};

/// GET /api/dashboard - Dashboard statistics
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = dashboard_stats(&state.db, Utc::now())?;

    Ok(Json(stats))
}

/// GET /api/reports/monthly - Monthly income/expense buckets
pub async fn report_monthly(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyBucket>>, AppError> {
    let snapshot = LedgerSnapshot::load(&state.db)?;
    let monthly = aggregate_by_month(&snapshot.transactions);

    Ok(Json(monthly))
}

/// GET /api/forecast - Next-period prediction
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Prediction>, AppError> {
    let snapshot = LedgerSnapshot::load(&state.db)?;
    let monthly = aggregate_by_month(&snapshot.transactions);
    let prediction = predict_next_period(&monthly, snapshot.transactions.len());

    Ok(Json(prediction))
}
