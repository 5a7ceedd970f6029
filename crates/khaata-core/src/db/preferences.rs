//! Notification preference operations (singleton row)

use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::error::Result;
use crate::models::{Preferences, PreferencesUpdate};

fn row_to_preferences(row: &Row<'_>) -> rusqlite::Result<Preferences> {
    Ok(Preferences {
        app_notifications_enabled: row.get(0)?,
        sms_alerts_enabled: row.get(1)?,
        phone_number: row.get(2)?,
        notify_on_income: row.get(3)?,
        notify_on_expense: row.get(4)?,
        notify_on_insights: row.get(5)?,
        notify_on_reminders: row.get(6)?,
        expense_threshold: row.get(7)?,
    })
}

const PREF_COLUMNS: &str = "app_notifications_enabled, sms_alerts_enabled, phone_number, \
     notify_on_income, notify_on_expense, notify_on_insights, notify_on_reminders, \
     expense_threshold";

impl Database {
    /// Get the preferences, creating the default row on first access
    pub fn get_preferences(&self) -> Result<Preferences> {
        let conn = self.conn()?;

        let existing = conn
            .query_row(
                &format!("SELECT {} FROM preferences WHERE id = 1", PREF_COLUMNS),
                [],
                row_to_preferences,
            )
            .optional()?;

        if let Some(prefs) = existing {
            return Ok(prefs);
        }

        conn.execute("INSERT INTO preferences (id) VALUES (1)", [])?;
        Ok(Preferences::default())
    }

    /// Apply a partial preference update, returning the resulting preferences
    pub fn update_preferences(&self, update: &PreferencesUpdate) -> Result<Preferences> {
        let mut prefs = self.get_preferences()?;

        if let Some(v) = update.app_notifications_enabled {
            prefs.app_notifications_enabled = v;
        }
        if let Some(v) = update.sms_alerts_enabled {
            prefs.sms_alerts_enabled = v;
        }
        if let Some(ref v) = update.phone_number {
            prefs.phone_number = v.clone();
        }
        if let Some(v) = update.notify_on_income {
            prefs.notify_on_income = v;
        }
        if let Some(v) = update.notify_on_expense {
            prefs.notify_on_expense = v;
        }
        if let Some(v) = update.notify_on_insights {
            prefs.notify_on_insights = v;
        }
        if let Some(v) = update.notify_on_reminders {
            prefs.notify_on_reminders = v;
        }
        if let Some(v) = update.expense_threshold {
            prefs.expense_threshold = v;
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            UPDATE preferences SET
                app_notifications_enabled = ?,
                sms_alerts_enabled = ?,
                phone_number = ?,
                notify_on_income = ?,
                notify_on_expense = ?,
                notify_on_insights = ?,
                notify_on_reminders = ?,
                expense_threshold = ?
            WHERE id = 1
            "#,
            params![
                prefs.app_notifications_enabled,
                prefs.sms_alerts_enabled,
                prefs.phone_number,
                prefs.notify_on_income,
                prefs.notify_on_expense,
                prefs.notify_on_insights,
                prefs.notify_on_reminders,
                prefs.expense_threshold,
            ],
        )?;

        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_first_read() {
        let db = Database::in_memory().unwrap();

        let prefs = db.get_preferences().unwrap();
        assert!(prefs.app_notifications_enabled);
        assert!(!prefs.sms_alerts_enabled);
        assert!(prefs.phone_number.is_none());
        assert!(prefs.expense_threshold.is_none());
    }

    #[test]
    fn test_partial_update_preserves_other_fields() {
        let db = Database::in_memory().unwrap();

        let update = PreferencesUpdate {
            sms_alerts_enabled: Some(true),
            phone_number: Some(Some("+91 98765 43210".to_string())),
            ..Default::default()
        };
        let prefs = db.update_preferences(&update).unwrap();

        assert!(prefs.sms_alerts_enabled);
        assert_eq!(prefs.phone_number.as_deref(), Some("+91 98765 43210"));
        // untouched fields keep their defaults
        assert!(prefs.notify_on_expense);

        // Clearing the phone number via explicit null
        let clear = PreferencesUpdate {
            phone_number: Some(None),
            ..Default::default()
        };
        let prefs = db.update_preferences(&clear).unwrap();
        assert!(prefs.phone_number.is_none());
        assert!(prefs.sms_alerts_enabled); // still on
    }

    #[test]
    fn test_threshold_round_trip() {
        let db = Database::in_memory().unwrap();

        let update = PreferencesUpdate {
            expense_threshold: Some(Some(1000.0)),
            ..Default::default()
        };
        db.update_preferences(&update).unwrap();

        assert_eq!(db.get_preferences().unwrap().expense_threshold, Some(1000.0));
    }
}
