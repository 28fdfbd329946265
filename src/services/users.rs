//! User self-registration service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::RegisterUser,
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a user; returns the confirmation message
    pub async fn register(&self, request: RegisterUser) -> AppResult<String> {
        request
            .validate()
            .map_err(|_| AppError::missing_credentials())?;

        let RegisterUser { username, password } = request;

        if !self
            .repository
            .users
            .register_if_absent(&username, &password)?
        {
            tracing::warn!("Registration rejected: {} already registered", username);
            return Err(AppError::AlreadyRegistered { username });
        }

        tracing::info!("User registered: {}", username);
        Ok(format!("User {} registered successfully", username))
    }
}
