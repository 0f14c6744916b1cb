//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};

/// Catalog book as stored.
///
/// `available_copies` is mutated by the borrow (-1) and return (+1)
/// workflows and always stays within `0..=total_copies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

/// Payload for a catalog insertion. Title and author are stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

/// Recognized search fields for catalog search.
///
/// Anything else is not an error: searches with an unknown field return an
/// empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

impl SearchField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SearchField::Title),
            "author" => Some(SearchField::Author),
            "isbn" => Some(SearchField::Isbn),
            _ => None,
        }
    }
}
