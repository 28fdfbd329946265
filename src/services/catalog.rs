//! Catalog browsing service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, Catalog},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Whole catalog keyed by ISBN
    pub async fn list_books(&self) -> AppResult<Catalog> {
        self.repository.books.all()
    }

    /// Get a book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .get(isbn)?
            .ok_or_else(|| AppError::not_found(isbn))?;

        tracing::debug!("Catalog lookup: isbn={} title={}", isbn, book.title);
        Ok(book)
    }

    /// Books whose author matches exactly (case-sensitive)
    pub async fn books_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        self.filter_books(|book| book.author == author)
    }

    /// Books whose title matches exactly (case-sensitive)
    pub async fn books_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        self.filter_books(|book| book.title == title)
    }

    /// Reviews of the book with the given ISBN
    pub async fn reviews_by_isbn(&self, isbn: &str) -> AppResult<Vec<String>> {
        Ok(self.get_by_isbn(isbn).await?.reviews)
    }

    fn filter_books(&self, predicate: impl Fn(&Book) -> bool) -> AppResult<Vec<Book>> {
        Ok(self
            .repository
            .books
            .books()?
            .into_iter()
            .filter(|book| predicate(book))
            .collect())
    }
}
