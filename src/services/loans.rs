//! Borrow and return workflow service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{
    config::CirculationConfig,
    error::{AppError, AppResult},
    models::{fee, patron::is_valid_patron_id},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct LoansService {
    store: Arc<dyn LibraryStore>,
    config: CirculationConfig,
}

impl LoansService {
    pub fn new(store: Arc<dyn LibraryStore>, config: CirculationConfig) -> Self {
        Self { store, config }
    }

    /// Borrow a book for a patron.
    ///
    /// The two store writes (record insert, availability decrement) are
    /// independent: if the second fails the first is not rolled back, and
    /// the error names the stage that failed so callers can reconcile
    /// out-of-band.
    pub async fn borrow_book(&self, patron_id: &str, book_id: i64) -> AppResult<String> {
        if !is_valid_patron_id(patron_id) {
            return Err(AppError::Validation(
                "Invalid patron ID. Must be exactly 6 digits".to_string(),
            ));
        }

        let book = self
            .store
            .get_book_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if book.available_copies <= 0 {
            return Err(AppError::BusinessRule(
                "This book is currently not available".to_string(),
            ));
        }

        let current_borrowed = self.store.count_open_borrows(patron_id).await?;
        // Historical comparison: strictly greater-than, so a patron already
        // holding max_open_borrows + 1 books is the first one refused.
        if current_borrowed > self.config.max_open_borrows {
            return Err(AppError::BusinessRule(format!(
                "You have reached the maximum borrowing limit of {} books",
                self.config.max_open_borrows
            )));
        }

        let borrow_date = Utc::now();
        let due_date = borrow_date + Duration::days(self.config.loan_period_days);

        if !self
            .store
            .insert_borrow_record(patron_id, book_id, borrow_date, due_date)
            .await?
        {
            return Err(AppError::Storage(
                "Database error occurred while creating borrow record".to_string(),
            ));
        }

        if !self.store.update_book_availability(book_id, -1).await? {
            tracing::warn!(
                "Borrow record created for patron {} but availability update failed (book_id={})",
                patron_id,
                book_id
            );
            return Err(AppError::Storage(
                "Database error occurred while updating book availability".to_string(),
            ));
        }

        tracing::info!(
            "Patron {} borrowed book {} (due {})",
            patron_id,
            book_id,
            due_date.format("%Y-%m-%d")
        );
        Ok(format!(
            "Successfully borrowed \"{}\". Due date: {}.",
            book.title,
            due_date.format("%Y-%m-%d")
        ))
    }

    /// Return a borrowed book.
    ///
    /// The patron's open borrows are scanned in store order and the first
    /// record matching the book is closed. Any late fee is reported in the
    /// message only, never persisted or charged here. The two writes are
    /// independent, as in `borrow_book`.
    pub async fn return_book(&self, patron_id: &str, book_id: i64) -> AppResult<String> {
        if !is_valid_patron_id(patron_id) {
            return Err(AppError::Validation(
                "Invalid patron ID. Must be exactly 6 digits".to_string(),
            ));
        }

        if book_id <= 0 {
            return Err(AppError::Validation("Invalid book ID".to_string()));
        }

        let book = self
            .store
            .get_book_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let borrowed = self.store.list_open_borrows(patron_id).await?;
        let record = borrowed
            .into_iter()
            .find(|r| r.book_id == book_id)
            .ok_or_else(|| {
                AppError::BusinessRule(format!(
                    "Book '{}' was not borrowed by this patron",
                    book.title
                ))
            })?;

        let return_date = Utc::now();

        if !self
            .store
            .set_return_date(patron_id, book_id, return_date)
            .await?
        {
            return Err(AppError::Storage(
                "Database error occurred while recording return date".to_string(),
            ));
        }

        if !self.store.update_book_availability(book_id, 1).await? {
            tracing::warn!(
                "Return recorded for patron {} but availability update failed (book_id={})",
                patron_id,
                book_id
            );
            return Err(AppError::Storage(
                "Database error occurred while updating book availability".to_string(),
            ));
        }

        let assessment = fee::assess(record.due_date, return_date);
        let message = if assessment.amount > rust_decimal::Decimal::ZERO {
            format!(
                "Successfully returned \"{}\". Late fee: ${} ({} days overdue)",
                book.title, assessment.amount, assessment.days_overdue
            )
        } else {
            format!("Successfully returned \"{}\". No late fees", book.title)
        };

        tracing::info!("Patron {} returned book {}", patron_id, book_id);
        Ok(message)
    }
}
