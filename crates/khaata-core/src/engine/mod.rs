//! Ledger analysis engines
//!
//! Three stateless pure transforms over an in-memory ledger snapshot:
//! - `aggregate` - monthly income/expense buckets
//! - `forecast` - next-period trend extrapolation
//! - `alerts` - threshold/ratio rule evaluation
//!
//! Each recomputes fully from its input on every call; there is no cached or
//! incremental state.

mod aggregate;
mod alerts;
mod forecast;

pub use aggregate::aggregate_by_month;
pub use alerts::generate_alerts;
pub use forecast::predict_next_period;

use chrono::{DateTime, Utc};

use crate::db::Database;
use crate::error::Result;
use crate::models::{DashboardStats, Transaction};

/// A materialized view of the ledger passed into the engines
///
/// `current_balance = total_income - total_expenses`; both totals are
/// non-negative sums over same-kind transactions.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    /// Transactions in timestamp order
    pub transactions: Vec<Transaction>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub current_balance: f64,
}

impl LedgerSnapshot {
    /// Build a snapshot from a transaction list, computing the totals
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let total_income: f64 = transactions
            .iter()
            .filter(|t| t.kind == crate::models::TxKind::Income)
            .map(|t| t.amount)
            .sum();
        let total_expenses: f64 = transactions
            .iter()
            .filter(|t| t.kind == crate::models::TxKind::Expense)
            .map(|t| t.amount)
            .sum();

        Self {
            transactions,
            total_income,
            total_expenses,
            current_balance: total_income - total_expenses,
        }
    }

    /// Materialize a snapshot from the ledger store
    pub fn load(db: &Database) -> Result<Self> {
        Ok(Self::new(db.transactions_by_timestamp()?))
    }
}

/// Build the dashboard summary: totals, monthly series, forecast, alert count
pub fn dashboard_stats(db: &Database, now: DateTime<Utc>) -> Result<DashboardStats> {
    let snapshot = LedgerSnapshot::load(db)?;

    let monthly = aggregate_by_month(&snapshot.transactions);
    let prediction = predict_next_period(&monthly, snapshot.transactions.len());
    let alerts = generate_alerts(&snapshot, now);

    Ok(DashboardStats {
        total_income: snapshot.total_income,
        total_expenses: snapshot.total_expenses,
        net_profit: snapshot.total_income - snapshot.total_expenses,
        current_balance: snapshot.current_balance,
        transaction_count: snapshot.transactions.len() as i64,
        monthly,
        prediction,
        active_alerts: alerts.len() as i64,
    })
}
