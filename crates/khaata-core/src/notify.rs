//! Notification delivery layer
//!
//! Preference gating (per-kind toggles and the expense threshold) happens
//! here, before anything reaches a sink - the alert engine itself never
//! consults preferences. Delivery is fire-and-forget: sink failures are
//! logged and must never block or roll back a ledger mutation.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::db::Database;
use crate::error::Result;
use crate::models::{
    Alert, AlertPriority, Notification, NotificationKind, NotificationPayload, Preferences,
    Transaction, TxKind,
};

/// A delivery channel for notifications
///
/// Sinks decide from the preferences whether their channel is enabled;
/// kind-level suppression has already happened by the time a sink is called.
pub trait NotificationSink: Send + Sync {
    fn name(&self) -> &'static str;

    fn deliver(&self, note: &Notification, prefs: &Preferences) -> Result<()>;
}

/// In-app display sink (toast stand-in; renders to the log)
pub struct ToastSink;

impl NotificationSink for ToastSink {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn deliver(&self, note: &Notification, prefs: &Preferences) -> Result<()> {
        if !prefs.app_notifications_enabled {
            return Ok(());
        }

        info!(
            kind = note.kind.as_str(),
            priority = note.priority.as_str(),
            "{} {}: {}",
            note.kind.icon(),
            note.title,
            note.message
        );
        Ok(())
    }
}

/// Out-of-band SMS sink (stub - logs what would be sent)
pub struct SmsSink;

impl NotificationSink for SmsSink {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn deliver(&self, note: &Notification, prefs: &Preferences) -> Result<()> {
        if !prefs.sms_alerts_enabled {
            return Ok(());
        }
        let Some(phone) = prefs.phone_number.as_deref() else {
            debug!("SMS alerts enabled but no phone number configured");
            return Ok(());
        };

        info!(phone, "SMS would be sent: {}: {}", note.title, note.message);
        Ok(())
    }
}

/// Dispatches notifications through preference gating, persistence, and sinks
pub struct Notifier {
    db: Database,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Notifier {
    /// Create a notifier with the built-in toast and SMS sinks
    pub fn new(db: Database) -> Self {
        Self {
            db,
            sinks: vec![Box::new(ToastSink), Box::new(SmsSink)],
        }
    }

    /// Create a notifier with an explicit sink list (for testing)
    pub fn with_sinks(db: Database, sinks: Vec<Box<dyn NotificationSink>>) -> Self {
        Self { db, sinks }
    }

    /// Send a notification: gate on preferences, persist, then deliver
    ///
    /// Returns the persisted notification ID, or None if the notification was
    /// suppressed by preferences. Sink failures are logged, not propagated.
    pub fn send(&self, payload: NotificationPayload) -> Result<Option<i64>> {
        let prefs = self.db.get_preferences()?;

        if !prefs.kind_enabled(payload.kind) {
            debug!(kind = payload.kind.as_str(), "Notification kind disabled");
            return Ok(None);
        }

        // Expense threshold: suppress small expense notifications
        if payload.kind == NotificationKind::Expense {
            if let (Some(threshold), Some(amount)) = (prefs.expense_threshold, payload.amount) {
                if amount < threshold {
                    debug!(amount, threshold, "Expense below notification threshold");
                    return Ok(None);
                }
            }
        }

        let id = self.db.insert_notification(&payload)?;

        let note = Notification {
            id,
            kind: payload.kind,
            title: payload.title,
            message: payload.message,
            category: payload.category,
            amount: payload.amount,
            priority: payload.priority,
            is_read: false,
            created_at: Utc::now(),
        };

        for sink in &self.sinks {
            if let Err(e) = sink.deliver(&note, &prefs) {
                warn!(sink = sink.name(), error = %e, "Notification delivery failed");
            }
        }

        Ok(Some(id))
    }

    /// Emit the income/expense notification for a freshly recorded transaction
    pub fn notify_transaction(&self, tx: &Transaction) -> Result<Option<i64>> {
        let (kind, title, priority) = match tx.kind {
            TxKind::Income => (NotificationKind::Income, "Income recorded", AlertPriority::Low),
            TxKind::Expense => (
                NotificationKind::Expense,
                "Expense recorded",
                AlertPriority::Medium,
            ),
        };

        self.send(NotificationPayload {
            kind,
            title: title.to_string(),
            message: format!("₹{:.2} {} in {}", tx.amount, tx.kind, tx.category),
            category: Some(tx.category.clone()),
            amount: Some(tx.amount),
            priority,
        })
    }

    /// Push current alerts through the side-channel as insight notifications
    ///
    /// Returns how many were actually sent (suppressed ones don't count).
    pub fn notify_alerts(&self, alerts: &[Alert]) -> Result<usize> {
        let mut sent = 0;
        for alert in alerts {
            let delivered = self.send(NotificationPayload {
                kind: NotificationKind::Insight,
                title: alert.title.clone(),
                message: alert.message.clone(),
                category: Some(alert.kind.as_str().to_string()),
                amount: None,
                priority: alert.priority,
            })?;
            if delivered.is_some() {
                sent += 1;
            }
        }
        Ok(sent)
    }
}
