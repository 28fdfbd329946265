//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::user::RegisterUser, AppState};

/// Registration body. Anything other than a JSON object with string
/// fields is treated as missing credentials.
pub struct RegistrationForm(pub RegisterUser);

#[async_trait]
impl<S> FromRequest<S> for RegistrationForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Unreadable registration body: {}", rejection);
                AppError::missing_credentials()
            })?;

        // Structs also deserialize from sequences; only objects are accepted here
        if !body.is_object() {
            return Err(AppError::missing_credentials());
        }

        let request = serde_json::from_value::<RegisterUser>(body).map_err(|e| {
            tracing::debug!("Invalid registration body: {}", e);
            AppError::missing_credentials()
        })?;

        Ok(RegistrationForm(request))
    }
}

/// Path parameters whose rejection is a JSON `{message}` 400
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(PathParam(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Registration
        .route("/register", post(users::register))
        // Catalog
        .route("/", get(books::list_books))
        .route("/isbn/:isbn", get(books::get_book))
        .route("/author/:author", get(books::books_by_author))
        .route("/title/:title", get(books::books_by_title))
        .route("/review/:isbn", get(books::get_reviews))
        .with_state(state);

    routes
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
