//! Monthly aggregation of the transaction ledger

use crate::models::{MonthlyBucket, Transaction, TxKind};

/// Group transactions into monthly income/expense buckets
///
/// Buckets are keyed by the short month name only ("Jan", "Feb", ...) - the
/// same month of different years shares a bucket. Output order is first-seen
/// group order, not calendar order.
///
/// An empty ledger yields the single "No data" sentinel bucket so downstream
/// consumers never operate on an empty series.
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    if transactions.is_empty() {
        return vec![MonthlyBucket::no_data()];
    }

    let mut buckets: Vec<MonthlyBucket> = Vec::new();

    for tx in transactions {
        let label = tx.date.format("%b").to_string();

        let bucket = match buckets.iter_mut().find(|b| b.month == label) {
            Some(existing) => existing,
            None => {
                buckets.push(MonthlyBucket {
                    month: label,
                    income: 0.0,
                    expenses: 0.0,
                });
                buckets.last_mut().expect("just pushed")
            }
        };

        match tx.kind {
            TxKind::Income => bucket.income += tx.amount,
            TxKind::Expense => bucket.expenses += tx.amount,
        }
    }

    buckets
}
