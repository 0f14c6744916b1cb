//! Catalog management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook, SearchField},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn LibraryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Add a book to the catalog.
    ///
    /// Checks run in a fixed order and the first failure wins; the returned
    /// message names the rejected field. Title and author are stored trimmed.
    pub async fn add_book(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        total_copies: i32,
    ) -> AppResult<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > 200 {
            return Err(AppError::Validation(
                "Title must be less than 200 characters".to_string(),
            ));
        }

        let author = author.trim();
        if author.is_empty() {
            return Err(AppError::Validation("Author is required".to_string()));
        }
        if author.chars().count() > 100 {
            return Err(AppError::Validation(
                "Author must be less than 100 characters".to_string(),
            ));
        }

        if isbn.chars().count() != 13 {
            return Err(AppError::Validation(
                "ISBN must be exactly 13 digits".to_string(),
            ));
        }

        if total_copies <= 0 {
            return Err(AppError::Validation(
                "Total copies must be a positive integer".to_string(),
            ));
        }

        if self.store.get_book_by_isbn(isbn).await?.is_some() {
            return Err(AppError::BusinessRule(
                "A book with this ISBN already exists".to_string(),
            ));
        }

        let book = NewBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies,
            available_copies: total_copies,
        };

        if !self.store.insert_book(&book).await? {
            tracing::warn!("Catalog insert rejected by store (isbn={})", isbn);
            return Err(AppError::Storage(
                "error occurred while adding the book".to_string(),
            ));
        }

        tracing::info!("Added \"{}\" to catalog (isbn={})", title, isbn);
        Ok(format!(
            "\"{}\" has been successfully added to the catalog",
            title
        ))
    }

    /// Search the catalog by title, author, or ISBN.
    ///
    /// A blank term or an unrecognized search type yields an empty result
    /// set, not an error. Title and author match case-insensitively on
    /// substrings; ISBN requires exact equality.
    pub async fn search_books(&self, search_term: &str, search_type: &str) -> AppResult<Vec<Book>> {
        let term = search_term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let field = match SearchField::parse(search_type) {
            Some(f) => f,
            None => return Ok(Vec::new()),
        };

        let term_lower = term.to_lowercase();
        let books = self.store.list_books().await?;

        Ok(books
            .into_iter()
            .filter(|book| match field {
                SearchField::Title => book.title.to_lowercase().contains(&term_lower),
                SearchField::Author => book.author.to_lowercase().contains(&term_lower),
                SearchField::Isbn => book.isbn == term,
            })
            .collect())
    }
}
