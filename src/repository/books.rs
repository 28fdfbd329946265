//! Catalog store: ISBN-keyed books held in memory

use std::{fs, path::Path, sync::RwLock};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, Catalog},
};

/// Catalog compiled into the binary, used when no seed file is configured
const BUILTIN_SEED: &str = include_str!("../../data/books.json");

/// Read-mostly book store. Iteration order is seed insertion order.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: RwLock<Catalog>,
}

impl CatalogStore {
    pub fn new(books: Catalog) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Build a store from books, keyed by their own ISBN
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self::new(books.into_iter().map(|b| (b.isbn.clone(), b)).collect())
    }

    /// Load the catalog from `path`, or the built-in seed when `None`
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    AppError::CatalogLoad(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_seed_json(&raw)
            }
            None => Self::from_seed_json(BUILTIN_SEED),
        }
    }

    /// Parse a JSON object keyed by ISBN. A missing `isbn` field is taken from
    /// the key; a present one must match it.
    pub fn from_seed_json(raw: &str) -> AppResult<Self> {
        let mut books: Catalog = serde_json::from_str(raw)
            .map_err(|e| AppError::CatalogLoad(format!("invalid catalog JSON: {}", e)))?;

        for (key, book) in books.iter_mut() {
            if book.isbn.is_empty() {
                book.isbn = key.clone();
            } else if &book.isbn != key {
                return Err(AppError::CatalogLoad(format!(
                    "entry {} declares mismatched ISBN {}",
                    key, book.isbn
                )));
            }
        }

        Ok(Self::new(books))
    }

    /// Snapshot of the whole catalog
    pub fn all(&self) -> AppResult<Catalog> {
        Ok(self.read()?.clone())
    }

    /// All books in store order
    pub fn books(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.read()?.get(isbn).cloned())
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Leave the lock poisoned, as a writer panicking mid-update would
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = self.books.write();
                    panic!("catalog writer panicked");
                })
                .join()
        });
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Catalog>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_loads_ten_books_in_order() {
        let store = CatalogStore::load(None).unwrap();
        let books = store.books().unwrap();

        assert_eq!(books.len(), 10);
        assert_eq!(books[0].isbn, "1");
        assert_eq!(books[0].title, "Things Fall Apart");
        assert_eq!(books[9].isbn, "10");
        assert!(books.iter().all(|b| b.reviews.is_empty()));
    }

    #[test]
    fn test_seed_fills_isbn_from_key() {
        let store = CatalogStore::from_seed_json(
            r#"{"001": {"title": "A", "author": "Bob", "reviews": ["good"]}}"#,
        )
        .unwrap();

        let book = store.get("001").unwrap().unwrap();
        assert_eq!(book, Book::new("001", "A", "Bob").with_reviews(["good"]));
    }

    #[test]
    fn test_seed_rejects_mismatched_isbn() {
        let err = CatalogStore::from_seed_json(r#"{"1": {"isbn": "2", "title": "A", "author": "B"}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::CatalogLoad(_)));
    }

    #[test]
    fn test_seed_rejects_malformed_json() {
        assert!(matches!(
            CatalogStore::from_seed_json("[1, 2"),
            Err(AppError::CatalogLoad(_))
        ));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = CatalogStore::load(Some(Path::new("/nonexistent/books.json")));
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }

    #[test]
    fn test_get_absent_isbn() {
        let store = CatalogStore::from_books([Book::new("1", "A", "B")]);
        assert!(store.get("2").unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let store = CatalogStore::from_books([Book::new("1", "A", "B")]);
        store.poison();

        assert!(matches!(store.books(), Err(AppError::Internal(_))));
    }
}
