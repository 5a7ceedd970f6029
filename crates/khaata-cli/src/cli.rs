//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// KhaataKitab - bookkeeping for small businesses
#[derive(Parser)]
#[command(name = "khaata")]
#[command(about = "Record income and expenses, watch the trend, get alerts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to KHAATA_DB env var, then khaata.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a transaction
    Add {
        /// Amount (must be positive)
        #[arg(short, long)]
        amount: f64,

        /// Kind: income or expense
        #[arg(short, long)]
        kind: String,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record a transaction from a pasted bank SMS
    Sms {
        /// The SMS message text
        message: String,

        /// Category for the recorded transaction
        #[arg(short, long, default_value = "SMS Import")]
        category: String,
    },

    /// Manage transactions (list, delete)
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Show dashboard summary
    Dashboard,

    /// Show next-period forecast
    Forecast,

    /// Evaluate alert rules against the ledger
    Alerts {
        /// Also push alerts through the notification side-channel
        #[arg(long)]
        notify: bool,
    },

    /// Manage notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationsAction>,
    },

    /// Show or change notification preferences
    Preferences {
        #[command(subcommand)]
        action: Option<PreferencesAction>,
    },

    /// Show the credit score overview
    Credit,

    /// Export the ledger as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear the ledger (bulk reset)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List transactions newest-first
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Delete a transaction by ID
    Delete {
        /// Transaction ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum NotificationsAction {
    /// List notifications newest-first
    List {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Mark a notification as read
    Read {
        /// Notification ID
        id: i64,
    },

    /// Mark all notifications as read
    ReadAll,

    /// Delete a notification
    Delete {
        /// Notification ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum PreferencesAction {
    /// Show current preferences
    Show,

    /// Change preferences
    Set {
        /// Enable/disable in-app notifications
        #[arg(long)]
        app_notifications: Option<bool>,

        /// Enable/disable SMS alerts
        #[arg(long)]
        sms_alerts: Option<bool>,

        /// Phone number for SMS alerts
        #[arg(long)]
        phone: Option<String>,

        /// Notify on income entries
        #[arg(long)]
        on_income: Option<bool>,

        /// Notify on expense entries
        #[arg(long)]
        on_expense: Option<bool>,

        /// Notify on insights
        #[arg(long)]
        on_insights: Option<bool>,

        /// Notify on reminders
        #[arg(long)]
        on_reminders: Option<bool>,

        /// Only notify for expenses at or above this amount (0 clears)
        #[arg(long)]
        expense_threshold: Option<f64>,
    },
}
