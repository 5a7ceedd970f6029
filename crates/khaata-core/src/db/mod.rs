//! Ledger store with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `transactions` - Ledger CRUD and totals
//! - `notifications` - Persisted notification operations
//! - `preferences` - Singleton notification preferences row

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod notifications;
mod preferences;
mod transactions;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Ledger store wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool and run migrations
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create an in-memory database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because each pooled
    /// connection would otherwise open its own private database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/khaata_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Bulk reset: clear all ledger and notification data but preserve preferences
    pub fn reset(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            DELETE FROM notifications;
            DELETE FROM transactions;
            "#,
        )?;

        info!("Ledger reset complete");
        Ok(())
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: better concurrency, readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- Ledger transactions
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                amount REAL NOT NULL,
                kind TEXT NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                timestamp_ms INTEGER NOT NULL,
                source TEXT NOT NULL DEFAULT 'manual',
                entry_hash TEXT UNIQUE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_timestamp
                ON transactions(timestamp_ms);
            CREATE INDEX IF NOT EXISTS idx_transactions_kind
                ON transactions(kind);

            -- Persisted notifications
            CREATE TABLE IF NOT EXISTS notifications (
                id INTEGER PRIMARY KEY,
                kind TEXT NOT NULL,
                title TEXT NOT NULL,
                message TEXT NOT NULL,
                category TEXT,
                amount REAL,
                priority TEXT NOT NULL DEFAULT 'low',
                is_read INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_notifications_read
                ON notifications(is_read);

            -- Notification preferences (singleton row)
            CREATE TABLE IF NOT EXISTS preferences (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                app_notifications_enabled INTEGER NOT NULL DEFAULT 1,
                sms_alerts_enabled INTEGER NOT NULL DEFAULT 0,
                phone_number TEXT,
                notify_on_income INTEGER NOT NULL DEFAULT 1,
                notify_on_expense INTEGER NOT NULL DEFAULT 1,
                notify_on_insights INTEGER NOT NULL DEFAULT 1,
                notify_on_reminders INTEGER NOT NULL DEFAULT 1,
                expense_threshold REAL
            );
            "#,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TxKind};
    use chrono::NaiveDate;

    #[test]
    fn test_migrations_idempotent() {
        let db = Database::in_memory().unwrap();
        // Running migrations twice should not fail
        db.run_migrations().unwrap();
    }

    #[test]
    fn test_reset_clears_ledger_keeps_preferences() {
        let db = Database::in_memory().unwrap();

        let tx = NewTransaction::manual(
            500.0,
            TxKind::Income,
            "Sales",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        db.insert_transaction(&tx).unwrap();
        assert_eq!(db.count_transactions().unwrap(), 1);

        let mut update = crate::models::PreferencesUpdate::default();
        update.sms_alerts_enabled = Some(true);
        db.update_preferences(&update).unwrap();

        db.reset().unwrap();

        assert_eq!(db.count_transactions().unwrap(), 0);
        assert!(db.get_preferences().unwrap().sms_alerts_enabled);
    }
}
