//! Notification preference handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use khaata_core::models::{Preferences, PreferencesUpdate};

/// GET /api/preferences - Current notification preferences
pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Preferences>, AppError> {
    let prefs = state.db.get_preferences()?;

    Ok(Json(prefs))
}

/// PUT /api/preferences - Apply a partial preference update
///
/// Absent fields keep their current value; explicit nulls clear the optional
/// fields (phone number, expense threshold).
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<Preferences>, AppError> {
    let prefs = state.db.update_preferences(&update)?;

    Ok(Json(prefs))
}
