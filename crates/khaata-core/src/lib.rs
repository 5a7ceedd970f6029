//! KhaataKitab Core Library
//!
//! Shared functionality for the KhaataKitab bookkeeping tool:
//! - Ledger store (SQLite) with transactions, notifications, and preferences
//! - Monthly aggregation, trend forecast, and rule-based alert engines
//! - Preference-gated notification delivery with pluggable sinks
//! - Bank SMS parsing for quick transaction entry
//! - Static credit score overview
//! - CSV ledger export

pub mod credit;
pub mod db;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod sms;

pub use credit::{credit_report, CreditRating, CreditReport};
pub use db::Database;
pub use engine::{
    aggregate_by_month, dashboard_stats, generate_alerts, predict_next_period, LedgerSnapshot,
};
pub use error::{Error, Result};
pub use export::export_transactions_csv;
pub use notify::{NotificationSink, Notifier, SmsSink, ToastSink};
pub use sms::{parse_sms, SmsDraft};
