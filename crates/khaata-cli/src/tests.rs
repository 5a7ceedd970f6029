//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use khaata_core::db::Database;
use khaata_core::models::TxKind;

use crate::commands;

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

// ========== Ledger Command Tests ==========

#[test]
fn test_cmd_add_records_transaction() {
    let db = setup_test_db();

    let result = commands::cmd_add(&db, 500.0, "income", "Sales", Some("2025-01-15"));
    assert!(result.is_ok());

    let transactions = db.list_transactions(10, 0).unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, 500.0);
    assert_eq!(transactions[0].kind, TxKind::Income);
    assert_eq!(transactions[0].category, "Sales");

    // Default preferences: the entry produced a notification
    assert_eq!(db.list_notifications(10, 0).unwrap().len(), 1);
}

#[test]
fn test_cmd_add_rejects_bad_kind_and_date() {
    let db = setup_test_db();

    let result = commands::cmd_add(&db, 500.0, "transfer", "Sales", None);
    assert!(result.is_err());

    let result = commands::cmd_add(&db, 500.0, "income", "Sales", Some("15-01-2025"));
    assert!(result.is_err());

    assert_eq!(db.count_transactions().unwrap(), 0);
}

#[test]
fn test_cmd_sms_records_and_dedups() {
    let db = setup_test_db();
    let message = "Debited Rs 750 from A/C XX1234 on 05-Feb-2025";

    commands::cmd_sms(&db, message, "Stock").unwrap();
    assert_eq!(db.count_transactions().unwrap(), 1);

    // Same SMS pasted again is skipped, not an error
    commands::cmd_sms(&db, message, "Stock").unwrap();
    assert_eq!(db.count_transactions().unwrap(), 1);

    let tx = &db.list_transactions(10, 0).unwrap()[0];
    assert_eq!(tx.amount, 750.0);
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.category, "Stock");
}

#[test]
fn test_cmd_transactions_list_and_delete() {
    let db = setup_test_db();
    commands::cmd_add(&db, 100.0, "income", "Sales", Some("2025-01-01")).unwrap();

    assert!(commands::cmd_transactions_list(&db, 20).is_ok());

    let id = db.list_transactions(1, 0).unwrap()[0].id;
    assert!(commands::cmd_transactions_delete(&db, id).is_ok());
    assert_eq!(db.count_transactions().unwrap(), 0);

    // Deleting again fails
    assert!(commands::cmd_transactions_delete(&db, id).is_err());
}

#[test]
fn test_cmd_export_to_file() {
    let db = setup_test_db();
    commands::cmd_add(&db, 100.0, "income", "Sales", Some("2025-01-01")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");

    commands::cmd_export(&db, Some(&path)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,date,kind,category,amount"));
    assert!(text.contains("Sales"));
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_dashboard_and_forecast_run() {
    let db = setup_test_db();
    commands::cmd_add(&db, 1000.0, "income", "Sales", Some("2025-01-01")).unwrap();
    commands::cmd_add(&db, 400.0, "expense", "Rent", Some("2025-02-01")).unwrap();

    assert!(commands::cmd_dashboard(&db).is_ok());
    assert!(commands::cmd_forecast(&db).is_ok());
    assert!(commands::cmd_credit().is_ok());
}

#[test]
fn test_cmd_alerts_with_notify() {
    let db = setup_test_db();
    // Tight books: warning + danger alerts
    commands::cmd_add(&db, 10_000.0, "income", "Sales", Some("2025-01-01")).unwrap();
    commands::cmd_add(&db, 8_500.0, "expense", "Stock", Some("2025-01-15")).unwrap();

    let before = db.list_notifications(50, 0).unwrap().len();

    assert!(commands::cmd_alerts(&db, true).is_ok());

    let after = db.list_notifications(50, 0).unwrap().len();
    assert_eq!(after - before, 2);
}

// ========== Notification Command Tests ==========

#[test]
fn test_cmd_notifications_flow() {
    let db = setup_test_db();
    commands::cmd_add(&db, 100.0, "income", "Sales", Some("2025-01-01")).unwrap();

    assert!(commands::cmd_notifications_list(&db, 20).is_ok());

    let id = db.list_notifications(1, 0).unwrap()[0].id;
    assert!(commands::cmd_notifications_read(&db, id).is_ok());
    assert_eq!(db.unread_notification_count().unwrap(), 0);

    assert!(commands::cmd_notifications_delete(&db, id).is_ok());
    assert!(db.list_notifications(10, 0).unwrap().is_empty());
}

#[test]
fn test_cmd_preferences_set_and_show() {
    let db = setup_test_db();

    commands::cmd_preferences_set(
        &db,
        None,
        Some(true),
        Some("+91 98765 43210".to_string()),
        None,
        Some(false),
        None,
        None,
        Some(1000.0),
    )
    .unwrap();

    let prefs = db.get_preferences().unwrap();
    assert!(prefs.sms_alerts_enabled);
    assert!(!prefs.notify_on_expense);
    assert_eq!(prefs.phone_number.as_deref(), Some("+91 98765 43210"));
    assert_eq!(prefs.expense_threshold, Some(1000.0));

    // Threshold of 0 clears it
    commands::cmd_preferences_set(&db, None, None, None, None, None, None, None, Some(0.0))
        .unwrap();
    assert_eq!(db.get_preferences().unwrap().expense_threshold, None);

    assert!(commands::cmd_preferences_show(&db).is_ok());
}
