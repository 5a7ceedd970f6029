//! Alert handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::{AppError, AppState};
use khaata_core::engine::{generate_alerts, LedgerSnapshot};
use khaata_core::models::Alert;

/// GET /api/alerts - Evaluate the alert rules against the current ledger
///
/// The list is recomputed on every call; nothing is persisted here.
pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Alert>>, AppError> {
    let snapshot = LedgerSnapshot::load(&state.db)?;
    let alerts = generate_alerts(&snapshot, Utc::now());

    Ok(Json(alerts))
}

#[derive(Serialize)]
pub struct NotifyAlertsResponse {
    pub success: bool,
    /// Alerts that actually reached the notification store (preference
    /// suppression may drop some)
    pub sent: usize,
    pub evaluated: usize,
}

/// POST /api/alerts/notify - Push current alerts through the notification
/// side-channel
pub async fn notify_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NotifyAlertsResponse>, AppError> {
    let snapshot = LedgerSnapshot::load(&state.db)?;
    let alerts = generate_alerts(&snapshot, Utc::now());

    let sent = state.notifier.notify_alerts(&alerts)?;

    Ok(Json(NotifyAlertsResponse {
        success: true,
        sent,
        evaluated: alerts.len(),
    }))
}
