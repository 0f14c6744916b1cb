//! Shared test fixtures: an in-memory store and a scripted payment gateway

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use libris_policy::error::AppResult;
use libris_policy::models::{Book, BorrowRecord, NewBook};
use libris_policy::payment::{ChargeReceipt, GatewayError, PaymentGateway, RefundReceipt};
use libris_policy::repository::LibraryStore;

/// In-memory `LibraryStore` backed by vectors, for exercising the services
/// end to end without a database.
#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
    records: Mutex<Vec<BorrowRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read of a book's availability, bypassing the services
    pub fn availability(&self, book_id: i64) -> Option<i32> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == book_id)
            .map(|b| b.available_copies)
    }
}

#[async_trait::async_trait]
impl LibraryStore for MemoryStore {
    async fn get_book_by_id(&self, book_id: i64) -> AppResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == book_id)
            .cloned())
    }

    async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned())
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        let mut books = self.books.lock().unwrap().clone();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn count_open_borrows(&self, patron_id: &str) -> AppResult<i64> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.patron_id == patron_id && r.return_date.is_none())
            .count() as i64)
    }

    async fn list_open_borrows(&self, patron_id: &str) -> AppResult<Vec<BorrowRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.patron_id == patron_id && r.return_date.is_none())
            .cloned()
            .collect())
    }

    async fn list_borrow_history(&self, patron_id: &str) -> AppResult<Vec<BorrowRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.patron_id == patron_id)
            .cloned()
            .collect())
    }

    async fn insert_book(&self, book: &NewBook) -> AppResult<bool> {
        let mut books = self.books.lock().unwrap();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        books.push(Book {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            total_copies: book.total_copies,
            available_copies: book.available_copies,
        });
        Ok(true)
    }

    async fn insert_borrow_record(
        &self,
        patron_id: &str,
        book_id: i64,
        borrow_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        records.push(BorrowRecord {
            id,
            patron_id: patron_id.to_string(),
            book_id,
            borrow_date,
            due_date,
            return_date: None,
        });
        Ok(true)
    }

    async fn update_book_availability(&self, book_id: i64, delta: i32) -> AppResult<bool> {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|b| b.id == book_id) {
            Some(book) => {
                book.available_copies += delta;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_return_date(
        &self,
        patron_id: &str,
        book_id: i64,
        return_date: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut records = self.records.lock().unwrap();
        match records
            .iter_mut()
            .find(|r| r.patron_id == patron_id && r.book_id == book_id && r.return_date.is_none())
        {
            Some(record) => {
                record.return_date = Some(return_date);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Gateway that approves everything and counts how often it was called
#[derive(Default)]
pub struct CountingGateway {
    pub charges: AtomicUsize,
    pub refunds: AtomicUsize,
}

#[async_trait::async_trait]
impl PaymentGateway for CountingGateway {
    async fn process_payment(
        &self,
        _patron_id: &str,
        _amount: Decimal,
        _description: &str,
    ) -> Result<ChargeReceipt, GatewayError> {
        self.charges.fetch_add(1, Ordering::SeqCst);
        Ok(ChargeReceipt {
            approved: true,
            transaction_id: Some("txn_itest1".to_string()),
            message: "Success".to_string(),
        })
    }

    async fn refund_payment(
        &self,
        _transaction_id: &str,
        _amount: Decimal,
    ) -> Result<RefundReceipt, GatewayError> {
        self.refunds.fetch_add(1, Ordering::SeqCst);
        Ok(RefundReceipt {
            approved: true,
            message: "Refund successful".to_string(),
        })
    }
}
