//! User registry: append-only list of registered users

use std::sync::{Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Mutex<Vec<User>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `username` is already taken
    pub fn is_registered(&self, username: &str) -> AppResult<bool> {
        Ok(self.lock()?.iter().any(|u| u.username == username))
    }

    /// Append a user unless the username is taken. The check and the append
    /// happen under one lock acquisition.
    pub fn register_if_absent(&self, username: &str, password: &str) -> AppResult<bool> {
        let mut users = self.lock()?;
        if users.iter().any(|u| u.username == username) {
            return Ok(false);
        }

        users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
        Ok(true)
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::Internal("user registry lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn test_register_then_reported_registered() {
        let registry = UserRegistry::new();
        assert!(!registry.is_registered("alice").unwrap());

        assert!(registry.register_if_absent("alice", "secret").unwrap());
        assert!(registry.is_registered("alice").unwrap());
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_is_not_appended() {
        let registry = UserRegistry::new();
        assert!(registry.register_if_absent("alice", "one").unwrap());
        assert!(!registry.register_if_absent("alice", "two").unwrap());
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let registry = UserRegistry::new();
        assert!(registry.register_if_absent("alice", "pw").unwrap());
        assert!(registry.register_if_absent("Alice", "pw").unwrap());
        assert_eq!(registry.len().unwrap(), 2);
    }

    #[test]
    fn test_concurrent_registrations_admit_one() {
        let registry = Arc::new(UserRegistry::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry
                        .register_if_absent("racer", &format!("pw{}", i))
                        .unwrap()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(registry.len().unwrap(), 1);
    }
}
