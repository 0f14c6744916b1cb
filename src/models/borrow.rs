//! Borrow record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single borrow of a book by a patron.
///
/// `return_date == None` means the borrow is still open. Policy (not the
/// store) guarantees at most one open record per (patron, book) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: i64,
    pub patron_id: String,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

impl BorrowRecord {
    /// Whether this borrow is open and past due as of the given instant
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        self.return_date.is_none() && as_of > self.due_date
    }
}
