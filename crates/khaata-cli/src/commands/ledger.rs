//! Transaction entry and listing commands

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use khaata_core::db::Database;
use khaata_core::export::export_transactions_csv;
use khaata_core::models::{NewTransaction, TxKind};
use khaata_core::notify::Notifier;
use khaata_core::sms::parse_sms;

pub fn cmd_add(
    db: &Database,
    amount: f64,
    kind: &str,
    category: &str,
    date: Option<&str>,
) -> Result<()> {
    let kind: TxKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?,
        None => Utc::now().date_naive(),
    };

    let id = db
        .insert_transaction(&NewTransaction::manual(amount, kind, category, date))?
        .expect("manual entries carry no dedup hash");

    println!("✅ Recorded {} of ₹{:.2} in {} ({})", kind, amount, category, date);

    // Fire-and-forget notification
    if let Some(tx) = db.get_transaction(id)? {
        if let Err(e) = Notifier::new(db.clone()).notify_transaction(&tx) {
            tracing::warn!(error = %e, "Failed to send transaction notification");
        }
    }

    Ok(())
}

pub fn cmd_sms(db: &Database, message: &str, category: &str) -> Result<()> {
    let today = Utc::now().date_naive();
    let draft = parse_sms(message, today)?;

    println!(
        "📩 Parsed SMS: {} of ₹{:.2} on {}",
        draft.kind, draft.amount, draft.date
    );

    let tx = draft.into_transaction(category);
    match db.insert_transaction(&tx)? {
        Some(id) => {
            println!("✅ Recorded as transaction #{}", id);

            if let Some(stored) = db.get_transaction(id)? {
                if let Err(e) = Notifier::new(db.clone()).notify_transaction(&stored) {
                    tracing::warn!(error = %e, "Failed to send transaction notification");
                }
            }
        }
        None => {
            println!("⏭️  Skipped: this SMS was already recorded");
        }
    }

    Ok(())
}

pub fn cmd_transactions_list(db: &Database, limit: i64) -> Result<()> {
    let transactions = db.list_transactions(limit, 0)?;

    if transactions.is_empty() {
        println!("No transactions yet. Record one with:");
        println!("  khaata add --amount 500 --kind income --category Sales");
        return Ok(());
    }

    println!();
    println!("📒 Transactions (newest first)");
    println!("   ──────────────────────────────────────────────────────");

    for tx in &transactions {
        let sign = match tx.kind {
            TxKind::Income => "+",
            TxKind::Expense => "-",
        };
        println!(
            "   #{:<5} {}  {}₹{:<10.2} {}",
            tx.id, tx.date, sign, tx.amount, tx.category
        );
    }

    let total = db.count_transactions()?;
    if total > transactions.len() as i64 {
        println!();
        println!("   Showing {} of {} transactions", transactions.len(), total);
    }

    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_transaction(id)?;

    println!("✅ Deleted transaction #{}", id);
    Ok(())
}

pub fn cmd_export(db: &Database, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = export_transactions_csv(db, file)?;
            println!("✅ Exported {} transactions to {}", count, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            export_transactions_csv(db, stdout.lock())?;
        }
    }

    Ok(())
}
