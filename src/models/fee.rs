//! Late-fee arithmetic and quote types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily rate for the first week overdue ($0.50)
const STANDARD_DAILY_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);
/// Daily rate beyond the first week ($1.00)
const ESCALATED_DAILY_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
/// Days charged at the standard rate before escalation
const STANDARD_RATE_DAYS: i64 = 7;
/// Ceiling on any single late fee ($15.00)
pub const MAX_LATE_FEE: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);

/// Outcome of applying the late-fee formula to one borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LateFeeAssessment {
    pub days_overdue: i64,
    pub amount: Decimal,
}

impl LateFeeAssessment {
    fn none() -> Self {
        Self {
            days_overdue: 0,
            amount: Decimal::ZERO,
        }
    }
}

/// Compute the late fee owed on a borrow due at `due_date`, as of `as_of`.
///
/// Overdue days are whole elapsed days (partial days do not count). The
/// first 7 days accrue at $0.50/day, every further day at $1.00/day, and
/// the total is capped at $15.00, rounded to 2 decimals.
pub fn assess(due_date: DateTime<Utc>, as_of: DateTime<Utc>) -> LateFeeAssessment {
    if as_of <= due_date {
        return LateFeeAssessment::none();
    }

    let days_overdue = (as_of - due_date).num_days();
    if days_overdue <= 0 {
        return LateFeeAssessment::none();
    }

    let fee = if days_overdue <= STANDARD_RATE_DAYS {
        Decimal::from(days_overdue) * STANDARD_DAILY_RATE
    } else {
        Decimal::from(STANDARD_RATE_DAYS) * STANDARD_DAILY_RATE
            + Decimal::from(days_overdue - STANDARD_RATE_DAYS) * ESCALATED_DAILY_RATE
    };

    LateFeeAssessment {
        days_overdue,
        amount: fee.min(MAX_LATE_FEE).round_dp(2),
    }
}

/// Status label attached to a late-fee quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeStatus {
    #[serde(rename = "Not overdue")]
    NotOverdue,
    #[serde(rename = "Overdue")]
    Overdue,
    #[serde(rename = "Invalid patron ID")]
    InvalidPatronId,
    #[serde(rename = "Invalid book ID")]
    InvalidBookId,
    #[serde(rename = "Book not found")]
    BookNotFound,
    #[serde(rename = "Book not borrowed by this patron")]
    NotBorrowed,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::NotOverdue => "Not overdue",
            FeeStatus::Overdue => "Overdue",
            FeeStatus::InvalidPatronId => "Invalid patron ID",
            FeeStatus::InvalidBookId => "Invalid book ID",
            FeeStatus::BookNotFound => "Book not found",
            FeeStatus::NotBorrowed => "Book not borrowed by this patron",
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computed, non-persisted late-fee estimate for one (patron, book) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateFeeQuote {
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub status: FeeStatus,
}

impl LateFeeQuote {
    /// Zero-fee quote carrying a terminal or not-overdue status
    pub fn empty(status: FeeStatus) -> Self {
        Self {
            fee_amount: Decimal::ZERO,
            days_overdue: 0,
            status,
        }
    }
}
