//! User registration endpoint

use axum::{extract::State, Json};

use crate::error::{AppResult, MessageResponse};

use super::RegistrationForm;

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = crate::models::user::RegisterUser,
    responses(
        (status = 200, description = "User registered", body = crate::error::MessageResponse),
        (status = 400, description = "Missing fields or username already registered", body = crate::error::MessageResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    RegistrationForm(request): RegistrationForm,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.users.register(request).await?;
    Ok(Json(MessageResponse::new(message)))
}
