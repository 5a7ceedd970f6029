//! Dashboard, forecast, alert, and credit commands

use anyhow::Result;
use chrono::Utc;

use khaata_core::credit::credit_report;
use khaata_core::db::Database;
use khaata_core::engine::{
    aggregate_by_month, dashboard_stats, generate_alerts, predict_next_period, LedgerSnapshot,
};
use khaata_core::models::{AlertKind, AlertPriority};
use khaata_core::notify::Notifier;

pub fn cmd_dashboard(db: &Database) -> Result<()> {
    let stats = dashboard_stats(db, Utc::now())?;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│        📒 KhaataKitab Dashboard         │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Transactions:    {}", stats.transaction_count);
    println!("  Total Income:    ₹{:.2}", stats.total_income);
    println!("  Total Expenses:  ₹{:.2}", stats.total_expenses);
    println!("  Net Profit:      ₹{:.2}", stats.net_profit);
    println!("  Balance:         ₹{:.2}", stats.current_balance);
    println!();
    println!("  📈 Cashflow by month");
    for bucket in &stats.monthly {
        println!(
            "     {:<8} in ₹{:<12.2} out ₹{:.2}",
            bucket.month, bucket.income, bucket.expenses
        );
    }
    println!();
    println!(
        "  🔮 Next period: income ₹{:.0}, expenses ₹{:.0}, profit ₹{:.0}",
        stats.prediction.income, stats.prediction.expenses, stats.prediction.profit
    );
    println!();

    if stats.active_alerts > 0 {
        println!("  ⚠️  Active Alerts: {}", stats.active_alerts);
        println!("  Run 'khaata alerts' to see what needs attention.");
    }

    Ok(())
}

pub fn cmd_forecast(db: &Database) -> Result<()> {
    let snapshot = LedgerSnapshot::load(db)?;
    let monthly = aggregate_by_month(&snapshot.transactions);
    let prediction = predict_next_period(&monthly, snapshot.transactions.len());

    if snapshot.transactions.len() < 2 {
        println!("Not enough data to forecast yet - record at least 2 transactions.");
        return Ok(());
    }

    println!();
    println!("🔮 Next-Period Forecast");
    println!("   ─────────────────────────────");
    println!("   Income:   ₹{:.0}", prediction.income);
    println!("   Expenses: ₹{:.0}", prediction.expenses);
    println!("   Profit:   ₹{:.0}", prediction.profit);
    println!();
    println!("   Based on {} months of data", monthly.len());

    Ok(())
}

pub fn cmd_alerts(db: &Database, notify: bool) -> Result<()> {
    let snapshot = LedgerSnapshot::load(db)?;
    let alerts = generate_alerts(&snapshot, Utc::now());

    if alerts.is_empty() {
        println!("✅ No active alerts. Your books look good!");
        return Ok(());
    }

    println!();
    println!("⚠️  Alerts");
    println!("   ─────────────────────────────────────────────────────────────");

    for alert in &alerts {
        let kind_icon = match alert.kind {
            AlertKind::Warning => "⚠️",
            AlertKind::Danger => "🔻",
            AlertKind::Info => "💡",
            AlertKind::Success => "✅",
        };
        let priority_mark = match alert.priority {
            AlertPriority::High => " [high]",
            AlertPriority::Medium => " [medium]",
            AlertPriority::Low => "",
        };

        println!("   {} {}{}", kind_icon, alert.title, priority_mark);
        println!("      {}", alert.message);
        println!();
    }

    if notify {
        let sent = Notifier::new(db.clone()).notify_alerts(&alerts)?;
        println!("📬 Sent {} of {} alerts to notifications", sent, alerts.len());
    }

    Ok(())
}

pub fn cmd_credit() -> Result<()> {
    let report = credit_report();

    println!();
    println!("💳 Credit Score");
    println!("   ─────────────────────────────");
    println!(
        "   {} / {}  ({})",
        report.score, report.max_score, report.rating_label
    );
    println!();

    for factor in &report.factors {
        println!(
            "   {:<20} {:>3}%  ({:?} impact)",
            factor.label, factor.score, factor.impact
        );
    }

    println!();
    println!("   💡 How to improve:");
    for tip in &report.tips {
        println!("      - {}", tip);
    }

    Ok(())
}
