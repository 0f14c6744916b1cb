//! Storage capability consumed by the policy services.
//!
//! Every policy operation takes its store as an explicit dependency so that
//! any backend (or a test double) can stand behind it. Reads surface missing
//! rows as `None`/empty rather than errors; writes report row-level failure
//! as `Ok(false)` and reserve `Err` for backend faults.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{Book, BorrowRecord, NewBook},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LibraryStore: Send + Sync {
    /// Look up a book by its store-assigned id
    async fn get_book_by_id(&self, book_id: i64) -> AppResult<Option<Book>>;

    /// Look up a book by ISBN
    async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// All catalog books, ordered by title
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Number of open borrow records for a patron
    async fn count_open_borrows(&self, patron_id: &str) -> AppResult<i64>;

    /// A patron's open borrow records
    async fn list_open_borrows(&self, patron_id: &str) -> AppResult<Vec<BorrowRecord>>;

    /// A patron's full borrow history, open and closed
    async fn list_borrow_history(&self, patron_id: &str) -> AppResult<Vec<BorrowRecord>>;

    /// Insert a catalog book
    async fn insert_book(&self, book: &NewBook) -> AppResult<bool>;

    /// Insert an open borrow record
    async fn insert_borrow_record(
        &self,
        patron_id: &str,
        book_id: i64,
        borrow_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Adjust a book's available-copy count by `delta`
    async fn update_book_availability(&self, book_id: i64, delta: i32) -> AppResult<bool>;

    /// Close the open borrow record for (patron, book)
    async fn set_return_date(
        &self,
        patron_id: &str,
        book_id: i64,
        return_date: DateTime<Utc>,
    ) -> AppResult<bool>;
}
