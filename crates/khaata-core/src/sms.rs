//! Bank SMS parsing for quick transaction entry
//!
//! Parses messages like "Debited Rs 500 from A/C XX1234 on 01-Jan-2025" into
//! a transaction draft. Parsed entries are deduplicated on a hash of the
//! normalized message text, so pasting the same SMS twice records it once.

use chrono::NaiveDate;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::models::{EntrySource, NewTransaction, TxKind};

/// A transaction draft parsed from an SMS message
#[derive(Debug, Clone, PartialEq)]
pub struct SmsDraft {
    pub amount: f64,
    pub kind: TxKind,
    pub date: NaiveDate,
    /// The original message text
    pub raw: String,
}

impl SmsDraft {
    /// Convert the draft into a new transaction with the given category
    pub fn into_transaction(self, category: impl Into<String>) -> NewTransaction {
        let hash = entry_hash(&self.raw);
        NewTransaction {
            amount: self.amount,
            kind: self.kind,
            category: category.into(),
            date: self.date,
            source: EntrySource::Sms,
            entry_hash: Some(hash),
        }
    }
}

/// Dedup hash over the normalized message text (lowercased, whitespace
/// collapsed)
pub fn entry_hash(text: &str) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Parse a bank SMS into a transaction draft
///
/// Recognizes a debit/credit keyword, an amount ("Rs 500", "Rs. 1,200.50",
/// "INR 500", "₹500"), and an optional date ("01-Jan-2025", "01/01/2025",
/// "2025-01-01"); messages without a date fall back to `today`.
pub fn parse_sms(text: &str, today: NaiveDate) -> Result<SmsDraft> {
    let kind = parse_direction(text)?;
    let amount = parse_amount(text)?;
    let date = parse_date(text).unwrap_or(today);

    Ok(SmsDraft {
        amount,
        kind,
        date,
        raw: text.to_string(),
    })
}

fn parse_direction(text: &str) -> Result<TxKind> {
    let debit = Regex::new(r"(?i)\b(debited|debit|paid|spent|withdrawn)\b")
        .expect("static pattern is valid");
    let credit = Regex::new(r"(?i)\b(credited|credit|received|deposited)\b")
        .expect("static pattern is valid");

    // Check debit first: "credited to merchant" phrasing is rarer than
    // "debited from A/C" in Indian bank SMS
    if debit.is_match(text) {
        Ok(TxKind::Expense)
    } else if credit.is_match(text) {
        Ok(TxKind::Income)
    } else {
        Err(Error::SmsParse(
            "could not determine debit/credit direction".to_string(),
        ))
    }
}

fn parse_amount(text: &str) -> Result<f64> {
    let amount_re = Regex::new(r"(?i)(?:rs\.?|inr|₹)\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)")
        .expect("static pattern is valid");

    let captures = amount_re
        .captures(text)
        .ok_or_else(|| Error::SmsParse("no amount found".to_string()))?;

    let digits = captures[1].replace(',', "");
    let amount: f64 = digits
        .parse()
        .map_err(|_| Error::SmsParse(format!("unparseable amount: {}", &captures[1])))?;

    if amount <= 0.0 {
        return Err(Error::SmsParse("amount must be positive".to_string()));
    }

    Ok(amount)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    // 01-Jan-2025
    let named = Regex::new(r"\b(\d{1,2}-[A-Za-z]{3}-\d{4})\b").expect("static pattern is valid");
    if let Some(m) = named.captures(text) {
        if let Ok(date) = NaiveDate::parse_from_str(&m[1], "%d-%b-%Y") {
            return Some(date);
        }
    }

    // 01/01/2025 (day first)
    let slashed = Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{4})\b").expect("static pattern is valid");
    if let Some(m) = slashed.captures(text) {
        if let Ok(date) = NaiveDate::parse_from_str(&m[1], "%d/%m/%Y") {
            return Some(date);
        }
    }

    // 2025-01-01
    let iso = Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").expect("static pattern is valid");
    if let Some(m) = iso.captures(text) {
        if let Ok(date) = NaiveDate::parse_from_str(&m[1], "%Y-%m-%d") {
            return Some(date);
        }
    }

    None
}
