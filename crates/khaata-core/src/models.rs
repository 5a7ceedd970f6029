//! Domain models for KhaataKitab

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Transaction kind - which side of the ledger an entry lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a transaction entered the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Manually entered via form or CLI
    #[default]
    Manual,
    /// Parsed from a bank SMS message
    Sms,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Sms => "sms",
        }
    }
}

impl std::str::FromStr for EntrySource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "sms" => Ok(Self::Sms),
            _ => Err(format!("Unknown entry source: {}", s)),
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger transaction
///
/// Immutable once recorded; removed only by explicit deletion or a bulk reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Always positive; the kind determines the sign of its contribution
    pub amount: f64,
    pub kind: TxKind,
    pub category: String,
    pub date: NaiveDate,
    /// Epoch milliseconds derived from `date`; the total order for trend math
    pub timestamp_ms: i64,
    pub source: EntrySource,
    pub created_at: DateTime<Utc>,
}

/// A new transaction to be recorded (before insertion)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub kind: TxKind,
    pub category: String,
    pub date: NaiveDate,
    pub source: EntrySource,
    /// Hash for deduplicating SMS-sourced entries (None for manual entry)
    pub entry_hash: Option<String>,
}

impl NewTransaction {
    pub fn manual(amount: f64, kind: TxKind, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            kind,
            category: category.into(),
            date,
            source: EntrySource::Manual,
            entry_hash: None,
        }
    }
}

/// One month's aggregated income/expense totals
///
/// The month label is the short month name only, not year-qualified; entries
/// from the same month of different years share a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyBucket {
    /// Sentinel bucket returned for an empty ledger so downstream consumers
    /// never see an empty series
    pub fn no_data() -> Self {
        Self {
            month: "No data".to_string(),
            income: 0.0,
            expenses: 0.0,
        }
    }
}

/// Next-period forecast derived from the monthly series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl Prediction {
    /// Zero prediction returned when there is not enough data to extrapolate
    pub fn zero() -> Self {
        Self {
            income: 0.0,
            expenses: 0.0,
            profit: 0.0,
        }
    }
}

// ========== Alert Models ==========

/// Alert categories, mapped to presentation attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Danger,
    Info,
    Success,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    /// Icon identifier for UI display
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Warning => "alert-circle",
            Self::Danger => "trending-down",
            Self::Info => "lightbulb",
            Self::Success => "check-circle",
        }
    }
}

impl std::str::FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            _ => Err(format!("Unknown alert kind: {}", s)),
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert priority, mapped to a badge variant for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Badge variant for UI display
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::High => "destructive",
            Self::Medium => "default",
            Self::Low => "secondary",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::str::FromStr for AlertPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown alert priority: {}", s)),
        }
    }
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule-triggered advisory message
///
/// Alerts are recomputed from ledger state on every evaluation; they are not
/// persisted unless explicitly pushed through the notification side-channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Per-evaluation ordinal; stable only within one evaluation
    pub id: i64,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// Relative label (always "Today" - alerts reflect the current snapshot)
    pub date: String,
    pub priority: AlertPriority,
}

// ========== Notification Models ==========

/// Notification categories (per-kind toggles live in `Preferences`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Income,
    Expense,
    Insight,
    Reminder,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Insight => "insight",
            Self::Reminder => "reminder",
        }
    }

    /// Icon shown next to in-app toasts
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Income => "💰",
            Self::Expense => "⚠️",
            Self::Insight => "📊",
            Self::Reminder => "🔔",
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "insight" => Ok(Self::Insight),
            "reminder" => Ok(Self::Reminder),
            _ => Err(format!("Unknown notification kind: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub priority: AlertPriority,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Relative timestamp label ("Just now", "5m ago", "Yesterday", ...)
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        let mins = (now - self.created_at).num_minutes();
        let hours = mins / 60;
        let days = hours / 24;

        if mins < 1 {
            "Just now".to_string()
        } else if mins < 60 {
            format!("{}m ago", mins)
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{}d ago", days)
        } else {
            self.created_at.date_naive().format("%Y-%m-%d").to_string()
        }
    }
}

/// A notification before persistence/delivery
#[derive(Debug, Clone)]
pub struct NotificationPayload {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub priority: AlertPriority,
}

// ========== Preference Models ==========

/// Per-user notification preferences (singleton row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub app_notifications_enabled: bool,
    pub sms_alerts_enabled: bool,
    pub phone_number: Option<String>,
    pub notify_on_income: bool,
    pub notify_on_expense: bool,
    pub notify_on_insights: bool,
    pub notify_on_reminders: bool,
    /// Suppress expense notifications below this amount (None = no floor)
    pub expense_threshold: Option<f64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            app_notifications_enabled: true,
            sms_alerts_enabled: false,
            phone_number: None,
            notify_on_income: true,
            notify_on_expense: true,
            notify_on_insights: true,
            notify_on_reminders: true,
            expense_threshold: None,
        }
    }
}

impl Preferences {
    /// Whether notifications of the given kind are enabled at all
    pub fn kind_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Income => self.notify_on_income,
            NotificationKind::Expense => self.notify_on_expense,
            NotificationKind::Insight => self.notify_on_insights,
            NotificationKind::Reminder => self.notify_on_reminders,
        }
    }
}

/// Partial preference update (absent fields keep their current value)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesUpdate {
    pub app_notifications_enabled: Option<bool>,
    pub sms_alerts_enabled: Option<bool>,
    /// Some(None) clears the phone number
    #[serde(default, with = "double_option")]
    pub phone_number: Option<Option<String>>,
    pub notify_on_income: Option<bool>,
    pub notify_on_expense: Option<bool>,
    pub notify_on_insights: Option<bool>,
    pub notify_on_reminders: Option<bool>,
    /// Some(None) clears the threshold
    #[serde(default, with = "double_option")]
    pub expense_threshold: Option<Option<f64>>,
}

/// Serde helper distinguishing "field absent" from "field set to null"
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(de).map(Some)
    }
}

// ========== Dashboard Models ==========

/// Dashboard summary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub current_balance: f64,
    pub transaction_count: i64,
    pub monthly: Vec<MonthlyBucket>,
    pub prediction: Prediction,
    pub active_alerts: i64,
}
