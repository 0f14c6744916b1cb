//! Patron identifiers and status report model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::borrow::BorrowRecord;

/// Check a patron identifier: exactly 6 ASCII digits
pub fn is_valid_patron_id(patron_id: &str) -> bool {
    patron_id.len() == 6 && patron_id.bytes().all(|b| b.is_ascii_digit())
}

/// Aggregated standing of one patron.
///
/// `error` is set (and everything else left empty/zero) when the patron id
/// itself is invalid; the report is never an `Err`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatronReport {
    pub borrowed_books: Vec<BorrowRecord>,
    pub borrowing_history: Vec<BorrowRecord>,
    pub borrowed_count: usize,
    pub total_late_fees: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PatronReport {
    pub fn invalid(reason: &str) -> Self {
        Self {
            borrowed_books: Vec::new(),
            borrowing_history: Vec::new(),
            borrowed_count: 0,
            total_late_fees: Decimal::ZERO,
            error: Some(reason.to_string()),
        }
    }
}
