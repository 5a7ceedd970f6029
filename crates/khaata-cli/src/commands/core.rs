//! Core command implementations (init, reset, serve) and shared utilities

use std::path::Path;

use anyhow::{Context, Result};

use khaata_core::db::Database;

/// Open the database, with context on failure
pub fn open_db(db_path: &Path) -> Result<Database> {
    Database::new(&db_path.to_string_lossy())
        .with_context(|| format!("Failed to open database: {}", db_path.display()))
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    println!("✅ Database initialized: {}", db.path());
    println!("   Record your first transaction with:");
    println!("   khaata add --amount 500 --kind income --category Sales");

    Ok(())
}

/// Clear the ledger (bulk reset)
pub fn cmd_reset(db_path: &Path, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    if !db_path.exists() {
        anyhow::bail!("Database not found: {}", db_path.display());
    }

    if !yes {
        print!("⚠️  This will delete all transactions and notifications.\n");
        print!("   Preferences will be preserved.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(db_path)?;
    db.reset()?;

    println!("✅ Ledger reset complete.");
    println!("   Cleared: transactions, notifications");
    println!("   Preserved: preferences");

    Ok(())
}

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let db = open_db(db_path)?;

    let static_dir = static_dir.map(|p| p.to_string_lossy().to_string());

    khaata_server::serve(db, host, port, static_dir.as_deref()).await
}
