//! Catalog browsing endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::book::{Book, Catalog},
};

use super::PathParam;

/// List the whole catalog, keyed by ISBN
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "All books keyed by ISBN", body = indexmap::IndexMap<String, Book>),
        (status = 500, description = "Internal error", body = crate::error::MessageResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Catalog>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book details by ISBN
#[utoipa::path(
    get,
    path = "/isbn/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "ISBN not found", body = crate::error::MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    PathParam(isbn): PathParam<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// List books by author (exact match)
#[utoipa::path(
    get,
    path = "/author/{author}",
    tag = "books",
    params(
        ("author" = String, Path, description = "Author name, matched exactly")
    ),
    responses(
        (status = 200, description = "Matching books, possibly none", body = [Book]),
        (status = 500, description = "Internal error", body = crate::error::MessageResponse)
    )
)]
pub async fn books_by_author(
    State(state): State<crate::AppState>,
    PathParam(author): PathParam<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_by_author(&author).await?;
    Ok(Json(books))
}

/// List books by title (exact match)
#[utoipa::path(
    get,
    path = "/title/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Title, matched exactly")
    ),
    responses(
        (status = 200, description = "Matching books, possibly none", body = [Book]),
        (status = 500, description = "Internal error", body = crate::error::MessageResponse)
    )
)]
pub async fn books_by_title(
    State(state): State<crate::AppState>,
    PathParam(title): PathParam<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_by_title(&title).await?;
    Ok(Json(books))
}

/// Get the reviews of a book
#[utoipa::path(
    get,
    path = "/review/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Reviews of the book", body = [String]),
        (status = 404, description = "ISBN not found", body = crate::error::MessageResponse)
    )
)]
pub async fn get_reviews(
    State(state): State<crate::AppState>,
    PathParam(isbn): PathParam<String>,
) -> AppResult<Json<Vec<String>>> {
    let reviews = state.services.catalog.reviews_by_isbn(&isbn).await?;
    Ok(Json(reviews))
}
