//! Ledger export

use std::io::Write;

use crate::db::Database;
use crate::error::Result;

/// Write the full ledger as CSV (newest-first), returning the row count
pub fn export_transactions_csv<W: Write>(db: &Database, writer: W) -> Result<usize> {
    let transactions = db.list_transactions(i64::MAX, 0)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["id", "date", "kind", "category", "amount"])?;

    for tx in &transactions {
        csv_writer.write_record([
            tx.id.to_string(),
            tx.date.to_string(),
            tx.kind.to_string(),
            tx.category.clone(),
            format!("{:.2}", tx.amount),
        ])?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}
