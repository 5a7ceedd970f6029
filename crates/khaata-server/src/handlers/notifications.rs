//! Notification handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, SuccessResponse, MAX_PAGE_LIMIT};
use khaata_core::models::Notification;

/// Query parameters for listing notifications
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Serialize)]
pub struct NotificationResponse {
    pub notifications: Vec<Notification>,
    pub unread: i64,
}

/// GET /api/notifications - List notifications newest-first
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NotificationQuery>,
) -> Result<Json<NotificationResponse>, AppError> {
    let limit = params.limit.max(1).min(MAX_PAGE_LIMIT);
    let offset = params.offset.max(0);

    let notifications = state.db.list_notifications(limit, offset)?;
    let unread = state.db.unread_notification_count()?;

    Ok(Json(NotificationResponse {
        notifications,
        unread,
    }))
}

/// POST /api/notifications/:id/read - Mark a notification as read
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.mark_notification_read(id)?;

    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Serialize)]
pub struct MarkAllReadResponse {
    pub success: bool,
    pub updated: usize,
}

/// POST /api/notifications/read-all - Mark all notifications as read
pub async fn mark_all_notifications_read(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MarkAllReadResponse>, AppError> {
    let updated = state.db.mark_all_notifications_read()?;

    Ok(Json(MarkAllReadResponse {
        success: true,
        updated,
    }))
}

/// DELETE /api/notifications/:id - Delete a notification
pub async fn delete_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_notification(id)?;

    Ok(Json(SuccessResponse { success: true }))
}
