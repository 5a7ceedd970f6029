//! Transaction operations

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let kind: String = row.get(2)?;
    let date: String = row.get(4)?;
    let source: String = row.get(6)?;
    let created_at: String = row.get(7)?;

    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        kind: kind.parse().unwrap_or(crate::models::TxKind::Expense),
        category: row.get(3)?,
        date: chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .unwrap_or_else(|_| chrono::Utc::now().date_naive()),
        timestamp_ms: row.get(5)?,
        source: source.parse().unwrap_or_default(),
        created_at: parse_datetime(&created_at),
    })
}

const TX_COLUMNS: &str =
    "id, amount, kind, category, date, timestamp_ms, source, created_at";

impl Database {
    /// Record a transaction (skips duplicates based on entry_hash, if present)
    ///
    /// Returns the new transaction ID, or None if the entry was a duplicate.
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<Option<i64>> {
        if !(tx.amount > 0.0) {
            return Err(Error::InvalidData(format!(
                "Transaction amount must be positive, got {}",
                tx.amount
            )));
        }

        let conn = self.conn()?;

        // Check for duplicate SMS entries
        if let Some(ref hash) = tx.entry_hash {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT id FROM transactions WHERE entry_hash = ?",
                    params![hash],
                    |row| row.get(0),
                )
                .optional()?;

            if existing.is_some() {
                return Ok(None); // Duplicate, skip
            }
        }

        let timestamp_ms = tx
            .date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
            .timestamp_millis();

        conn.execute(
            r#"
            INSERT INTO transactions (amount, kind, category, date, timestamp_ms, source, entry_hash)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                tx.amount,
                tx.kind.as_str(),
                tx.category,
                tx.date.to_string(),
                timestamp_ms,
                tx.source.as_str(),
                tx.entry_hash,
            ],
        )?;

        Ok(Some(conn.last_insert_rowid()))
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;

        let tx = conn
            .query_row(
                &format!("SELECT {} FROM transactions WHERE id = ?", TX_COLUMNS),
                params![id],
                row_to_transaction,
            )
            .optional()?;

        Ok(tx)
    }

    /// List transactions newest-first (display order)
    pub fn list_transactions(&self, limit: i64, offset: i64) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {}
            FROM transactions
            ORDER BY timestamp_ms DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
            TX_COLUMNS
        ))?;

        let rows = stmt.query_map(params![limit, offset], row_to_transaction)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// All transactions in timestamp order (the total order used by the
    /// trend computation)
    pub fn transactions_by_timestamp(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions ORDER BY timestamp_ms ASC, id ASC",
            TX_COLUMNS
        ))?;

        let rows = stmt.query_map([], row_to_transaction)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Delete a transaction by ID
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;

        let changed = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(Error::NotFound(format!("Transaction {} not found", id)));
        }

        Ok(())
    }

    /// Delete all transactions (bulk reset of the ledger only)
    pub fn clear_transactions(&self) -> Result<usize> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM transactions", [])?)
    }

    /// Count all transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }
}
