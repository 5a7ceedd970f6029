//! Static credit score overview
//!
//! The score is a fixed mock - there is no bureau integration. Rating bands
//! and factors match the values shown on the credit screen.

use serde::{Deserialize, Serialize};

/// Rating bands over the 300-900 score range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 750 {
            Self::Excellent
        } else if score >= 650 {
            Self::Good
        } else if score >= 550 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// How strongly a factor weighs on the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorImpact {
    High,
    Medium,
    Low,
}

/// One contributing factor with its sub-score
#[derive(Debug, Clone, Serialize)]
pub struct CreditFactor {
    pub label: &'static str,
    pub score: u32,
    pub impact: FactorImpact,
}

/// The credit overview served to the UI
#[derive(Debug, Clone, Serialize)]
pub struct CreditReport {
    pub score: u32,
    pub max_score: u32,
    /// score / max_score as a percentage, for the progress bar
    pub percentage: f64,
    pub rating: CreditRating,
    pub rating_label: &'static str,
    pub factors: Vec<CreditFactor>,
    pub tips: Vec<&'static str>,
}

/// Build the static credit overview
pub fn credit_report() -> CreditReport {
    let score = 720;
    let max_score = 900;
    let rating = CreditRating::from_score(score);

    CreditReport {
        score,
        max_score,
        percentage: f64::from(score) / f64::from(max_score) * 100.0,
        rating,
        rating_label: rating.label(),
        factors: vec![
            CreditFactor {
                label: "Payment History",
                score: 85,
                impact: FactorImpact::High,
            },
            CreditFactor {
                label: "Credit Utilization",
                score: 70,
                impact: FactorImpact::High,
            },
            CreditFactor {
                label: "Credit Age",
                score: 60,
                impact: FactorImpact::Medium,
            },
            CreditFactor {
                label: "Credit Mix",
                score: 75,
                impact: FactorImpact::Low,
            },
        ],
        tips: vec![
            "Pay all bills on time every month",
            "Keep credit utilization below 30%",
            "Avoid opening too many new accounts",
            "Maintain a diverse credit mix",
        ],
    }
}
