//! Data models for the Libris policy engine

pub mod book;
pub mod borrow;
pub mod fee;
pub mod patron;

pub use book::{Book, NewBook, SearchField};
pub use borrow::BorrowRecord;
pub use fee::{FeeStatus, LateFeeQuote};
pub use patron::PatronReport;
