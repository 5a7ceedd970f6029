//! Persisted notification operations

use rusqlite::{params, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{AlertPriority, Notification, NotificationPayload};

fn row_to_notification(row: &Row<'_>) -> rusqlite::Result<Notification> {
    let kind: String = row.get(1)?;
    let priority: String = row.get(6)?;
    let created_at: String = row.get(8)?;

    Ok(Notification {
        id: row.get(0)?,
        kind: kind.parse().unwrap_or(crate::models::NotificationKind::Insight),
        title: row.get(2)?,
        message: row.get(3)?,
        category: row.get(4)?,
        amount: row.get(5)?,
        priority: priority.parse().unwrap_or(AlertPriority::Low),
        is_read: row.get(7)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Persist a notification
    pub fn insert_notification(&self, payload: &NotificationPayload) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO notifications (kind, title, message, category, amount, priority)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                payload.kind.as_str(),
                payload.title,
                payload.message,
                payload.category,
                payload.amount,
                payload.priority.as_str(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List notifications newest-first
    pub fn list_notifications(&self, limit: i64, offset: i64) -> Result<Vec<Notification>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, kind, title, message, category, amount, priority, is_read, created_at
            FROM notifications
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )?;

        let rows = stmt.query_map(params![limit, offset], row_to_notification)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Mark a notification as read
    pub fn mark_notification_read(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;

        let changed = conn.execute(
            "UPDATE notifications SET is_read = 1 WHERE id = ?",
            params![id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Notification {} not found", id)));
        }

        Ok(())
    }

    /// Mark all unread notifications as read, returning how many changed
    pub fn mark_all_notifications_read(&self) -> Result<usize> {
        let conn = self.conn()?;
        Ok(conn.execute("UPDATE notifications SET is_read = 1 WHERE is_read = 0", [])?)
    }

    /// Delete a notification
    pub fn delete_notification(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;

        let changed = conn.execute("DELETE FROM notifications WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Notification {} not found", id)));
        }

        Ok(())
    }

    /// Count unread notifications
    pub fn unread_notification_count(&self) -> Result<i64> {
        let conn = self.conn()?;
        Ok(conn.query_row(
            "SELECT COUNT(*) FROM notifications WHERE is_read = 0",
            [],
            |row| row.get(0),
        )?)
    }
}
