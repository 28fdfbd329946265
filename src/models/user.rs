//! User model and registration request

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Registered user. Passwords are kept verbatim; there is no login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Self-registration request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
