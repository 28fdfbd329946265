//! Book model and related types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry, keyed by ISBN in the catalog store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// ISBN (catalog key). May be omitted in seed files, where the map key is used.
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Reader reviews, in the order they were left
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: Vec::new(),
        }
    }

    pub fn with_reviews<I, S>(mut self, reviews: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviews = reviews.into_iter().map(Into::into).collect();
        self
    }
}

/// Whole catalog as served by `GET /`: ISBN to book, in store order
pub type Catalog = IndexMap<String, Book>;
