//! KhaataKitab CLI - small-business bookkeeping
//!
//! Usage:
//!   khaata init                       Initialize database
//!   khaata add -a 500 -k expense -c Rent   Record a transaction
//!   khaata dashboard                  Totals, trend, and forecast
//!   khaata serve --port 3000          Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // Database path: --db flag > KHAATA_DB env var > khaata.db
    let db_path: PathBuf = cli
        .db
        .or_else(|| std::env::var("KHAATA_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("khaata.db"));

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path),
        Commands::Add {
            amount,
            kind,
            category,
            date,
        } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_add(&db, amount, &kind, &category, date.as_deref())
        }
        Commands::Sms { message, category } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_sms(&db, &message, &category)
        }
        Commands::Transactions { action } => {
            let db = commands::open_db(&db_path)?;
            match action {
                None => commands::cmd_transactions_list(&db, 20),
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, limit)
                }
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Dashboard => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_dashboard(&db)
        }
        Commands::Forecast => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_forecast(&db)
        }
        Commands::Alerts { notify } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_alerts(&db, notify)
        }
        Commands::Notifications { action } => {
            let db = commands::open_db(&db_path)?;
            match action {
                None => commands::cmd_notifications_list(&db, 20),
                Some(NotificationsAction::List { limit }) => {
                    commands::cmd_notifications_list(&db, limit)
                }
                Some(NotificationsAction::Read { id }) => {
                    commands::cmd_notifications_read(&db, id)
                }
                Some(NotificationsAction::ReadAll) => commands::cmd_notifications_read_all(&db),
                Some(NotificationsAction::Delete { id }) => {
                    commands::cmd_notifications_delete(&db, id)
                }
            }
        }
        Commands::Preferences { action } => {
            let db = commands::open_db(&db_path)?;
            match action {
                None | Some(PreferencesAction::Show) => commands::cmd_preferences_show(&db),
                Some(PreferencesAction::Set {
                    app_notifications,
                    sms_alerts,
                    phone,
                    on_income,
                    on_expense,
                    on_insights,
                    on_reminders,
                    expense_threshold,
                }) => commands::cmd_preferences_set(
                    &db,
                    app_notifications,
                    sms_alerts,
                    phone,
                    on_income,
                    on_expense,
                    on_insights,
                    on_reminders,
                    expense_threshold,
                ),
            }
        }
        Commands::Credit => commands::cmd_credit(),
        Commands::Export { output } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_export(&db, output.as_deref())
        }
        Commands::Reset { yes } => commands::cmd_reset(&db_path, yes),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&db_path, &host, port, static_dir.as_deref()).await,
    }
}
