//! Patron status reporting service

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::{fee, patron::is_valid_patron_id, PatronReport},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct PatronsService {
    store: Arc<dyn LibraryStore>,
}

impl PatronsService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Report a patron's current borrows, full history, and total late fees.
    ///
    /// An invalid patron id yields an empty report with the error marker set
    /// rather than a failure. Fees are summed over every currently-overdue
    /// open borrow using the shared late-fee formula.
    pub async fn status_report(&self, patron_id: &str) -> AppResult<PatronReport> {
        if !is_valid_patron_id(patron_id) {
            return Ok(PatronReport::invalid("Invalid patron ID"));
        }

        let borrowed_books = self.store.list_open_borrows(patron_id).await?;
        let borrowing_history = self.store.list_borrow_history(patron_id).await?;

        let now = Utc::now();
        let total_late_fees: Decimal = borrowed_books
            .iter()
            .filter(|record| record.is_overdue(now))
            .map(|record| fee::assess(record.due_date, now).amount)
            .sum();

        Ok(PatronReport {
            borrowed_count: borrowed_books.len(),
            borrowed_books,
            borrowing_history,
            total_late_fees: total_late_fees.round_dp(2),
            error: None,
        })
    }
}
