//! Repository layer: the in-memory stores behind the API

pub mod books;
pub mod users;

use std::sync::Arc;

pub use books::CatalogStore;
pub use users::UserRegistry;

/// Main repository struct holding both stores
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<CatalogStore>,
    pub users: Arc<UserRegistry>,
}

impl Repository {
    /// Create a repository over the given catalog and an empty user registry
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            books: Arc::new(catalog),
            users: Arc::new(UserRegistry::new()),
        }
    }
}
