//! Rule-based alert generation over the ledger snapshot

use chrono::{DateTime, Utc};

use super::LedgerSnapshot;
use crate::models::{Alert, AlertKind, AlertPriority, TxKind};

/// Expense-to-income ratio above which the cashflow warning fires
const EXPENSE_RATIO_LIMIT: f64 = 0.8;

/// Balance floor for the low-balance alert (exclusive on both ends)
const LOW_BALANCE_LIMIT: f64 = 10_000.0;

/// Spending-spike window in milliseconds (7 days, inclusive)
const SPIKE_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Minimum recent expense count before the spike rule can fire
const SPIKE_MIN_SAMPLES: usize = 3;

/// Today's spend must exceed the recent average by this factor to spike
const SPIKE_FACTOR: f64 = 1.2;

/// Expense share of income below which the healthy-habits note fires
const HEALTHY_RATIO_LIMIT: f64 = 0.7;

/// Evaluate the alert rules against the current ledger state
///
/// Rules are evaluated independently; each appends at most one alert, and the
/// evaluation order here IS the display order. Nothing is persisted - the
/// list is recomputed from the snapshot on every call.
pub fn generate_alerts(snapshot: &LedgerSnapshot, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    // 1. High expense ratio
    if snapshot.total_income > 0.0 {
        let ratio = snapshot.total_expenses / snapshot.total_income;
        if ratio > EXPENSE_RATIO_LIMIT {
            let pct = (ratio * 100.0).round() as i64;
            push(
                &mut alerts,
                AlertKind::Warning,
                AlertPriority::High,
                "Low Cashflow Alert",
                format!(
                    "Your expenses are {}% of your income. Consider reducing non-essential spending.",
                    pct
                ),
            );
        }
    }

    // 2. Low balance
    if snapshot.current_balance > 0.0 && snapshot.current_balance < LOW_BALANCE_LIMIT {
        push(
            &mut alerts,
            AlertKind::Danger,
            AlertPriority::High,
            "Low Balance Warning",
            format!(
                "Your current balance is down to ₹{:.0}. Keep an eye on upcoming expenses.",
                snapshot.current_balance
            ),
        );
    }

    // 3. Spending spike: recent window by timestamp arithmetic, today's
    //    figure by exact calendar-date equality
    let now_ms = now.timestamp_millis();
    let recent: Vec<f64> = snapshot
        .transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense && now_ms - t.timestamp_ms <= SPIKE_WINDOW_MS)
        .map(|t| t.amount)
        .collect();

    if recent.len() >= SPIKE_MIN_SAMPLES {
        let avg_recent: f64 = recent.iter().sum::<f64>() / recent.len() as f64;

        let today = now.date_naive();
        let today_expenses: f64 = snapshot
            .transactions
            .iter()
            .filter(|t| t.kind == TxKind::Expense && t.date == today)
            .map(|t| t.amount)
            .sum();

        if today_expenses > avg_recent * SPIKE_FACTOR {
            push(
                &mut alerts,
                AlertKind::Info,
                AlertPriority::Medium,
                "Spending Spike Detected",
                format!(
                    "Today's expenses of ₹{:.0} are well above your recent average of ₹{:.0} per purchase.",
                    today_expenses, avg_recent
                ),
            );
        }
    }

    // 4. Healthy habits
    if snapshot.current_balance > 0.0
        && snapshot.total_expenses < snapshot.total_income * HEALTHY_RATIO_LIMIT
    {
        push(
            &mut alerts,
            AlertKind::Success,
            AlertPriority::Low,
            "Healthy Spending Habits",
            "You're keeping expenses well below your income. This builds a strong cash cushion!"
                .to_string(),
        );
    }

    alerts
}

fn push(
    alerts: &mut Vec<Alert>,
    kind: AlertKind,
    priority: AlertPriority,
    title: &str,
    message: String,
) {
    alerts.push(Alert {
        id: alerts.len() as i64 + 1,
        kind,
        title: title.to_string(),
        message,
        date: "Today".to_string(),
        priority,
    });
}
