//! Notification and preference commands

use anyhow::Result;
use chrono::Utc;

use khaata_core::db::Database;
use khaata_core::models::PreferencesUpdate;

pub fn cmd_notifications_list(db: &Database, limit: i64) -> Result<()> {
    let notifications = db.list_notifications(limit, 0)?;
    let unread = db.unread_notification_count()?;

    if notifications.is_empty() {
        println!("🔔 No notifications yet.");
        println!("   You'll receive alerts here when you add transactions.");
        return Ok(());
    }

    println!();
    if unread > 0 {
        println!("🔔 Notifications ({} unread)", unread);
    } else {
        println!("🔔 Notifications (all caught up!)");
    }
    println!("   ─────────────────────────────────────────────────────────────");

    let now = Utc::now();
    for note in &notifications {
        let unread_mark = if note.is_read { "  " } else { "● " };
        println!(
            "   {}#{:<4} {} {}  ({})",
            unread_mark,
            note.id,
            note.kind.icon(),
            note.title,
            note.relative_time(now)
        );
        println!("         {}", note.message);
    }

    Ok(())
}

pub fn cmd_notifications_read(db: &Database, id: i64) -> Result<()> {
    db.mark_notification_read(id)?;
    println!("✅ Marked notification #{} as read", id);
    Ok(())
}

pub fn cmd_notifications_read_all(db: &Database) -> Result<()> {
    let updated = db.mark_all_notifications_read()?;
    println!("✅ Marked {} notifications as read", updated);
    Ok(())
}

pub fn cmd_notifications_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_notification(id)?;
    println!("✅ Deleted notification #{}", id);
    Ok(())
}

pub fn cmd_preferences_show(db: &Database) -> Result<()> {
    let prefs = db.get_preferences()?;

    println!();
    println!("⚙️  Notification Preferences");
    println!("   ─────────────────────────────");
    println!("   App notifications: {}", on_off(prefs.app_notifications_enabled));
    println!("   SMS alerts:        {}", on_off(prefs.sms_alerts_enabled));
    println!(
        "   Phone number:      {}",
        prefs.phone_number.as_deref().unwrap_or("(not set)")
    );
    println!();
    println!("   Notify on income:    {}", on_off(prefs.notify_on_income));
    println!("   Notify on expense:   {}", on_off(prefs.notify_on_expense));
    println!("   Notify on insights:  {}", on_off(prefs.notify_on_insights));
    println!("   Notify on reminders: {}", on_off(prefs.notify_on_reminders));
    println!();
    match prefs.expense_threshold {
        Some(threshold) => println!("   Expense threshold: ₹{:.2}", threshold),
        None => println!("   Expense threshold: (none)"),
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_preferences_set(
    db: &Database,
    app_notifications: Option<bool>,
    sms_alerts: Option<bool>,
    phone: Option<String>,
    on_income: Option<bool>,
    on_expense: Option<bool>,
    on_insights: Option<bool>,
    on_reminders: Option<bool>,
    expense_threshold: Option<f64>,
) -> Result<()> {
    let update = PreferencesUpdate {
        app_notifications_enabled: app_notifications,
        sms_alerts_enabled: sms_alerts,
        phone_number: phone.map(|p| if p.is_empty() { None } else { Some(p) }),
        notify_on_income: on_income,
        notify_on_expense: on_expense,
        notify_on_insights: on_insights,
        notify_on_reminders: on_reminders,
        // 0 clears the threshold
        expense_threshold: expense_threshold.map(|t| if t > 0.0 { Some(t) } else { None }),
    };

    db.update_preferences(&update)?;

    println!("✅ Preferences updated");
    cmd_preferences_show(db)
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
