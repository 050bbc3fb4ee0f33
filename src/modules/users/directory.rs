//! In-memory user directory.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use questlog_core::AppError;
use uuid::Uuid;

use super::model::User;

/// The account store behind login and user management.
///
/// Cloning is cheap; every clone shares the same map. The lock is held only
/// for the duration of each operation, so concurrent requests never block on
/// anything long-lived.
#[derive(Clone, Default)]
pub struct UserDirectory {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an account, enforcing unique usernames and emails under the
    /// write lock.
    pub fn insert(&self, user: User) -> Result<User, AppError> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        if guard.values().any(|u| u.username == user.username) {
            return Err(AppError::bad_request("Username already exists"));
        }
        if guard.values().any(|u| u.email == user.email) {
            return Err(AppError::bad_request("Email already exists"));
        }
        guard.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: &Uuid) -> Option<User> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.get(id).cloned()
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.values().find(|u| u.username == username).cloned()
    }

    /// Returns every account, ordered by username.
    pub fn list(&self) -> Vec<User> {
        let guard = self.inner.read().expect("rwlock poisoned");
        let mut users: Vec<User> = guard.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    pub fn is_empty(&self) -> bool {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_auth::UserRole;

    fn sample_user(username: &str, email: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            UserRole::Player,
            "$2b$12$fakehash".to_string(),
        )
    }

    #[test]
    fn test_insert_and_get() {
        let directory = UserDirectory::new();
        assert!(directory.is_empty());

        let user = directory
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        assert!(!directory.is_empty());
        assert_eq!(directory.get(&user.id).unwrap().username, "rook");
        assert!(directory.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_find_by_username() {
        let directory = UserDirectory::new();
        directory
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        assert!(directory.find_by_username("rook").is_some());
        assert!(directory.find_by_username("nobody").is_none());
        // exact match, not case-insensitive
        assert!(directory.find_by_username("Rook").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_username() {
        let directory = UserDirectory::new();
        directory
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        let err = directory
            .insert(sample_user("rook", "other@example.com"))
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.message, "Username already exists");
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let directory = UserDirectory::new();
        directory
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        let err = directory
            .insert(sample_user("bram", "rook@example.com"))
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.message, "Email already exists");
    }

    #[test]
    fn test_list_ordered_by_username() {
        let directory = UserDirectory::new();
        directory
            .insert(sample_user("morgana", "morgana@example.com"))
            .unwrap();
        directory
            .insert(sample_user("ash", "ash@example.com"))
            .unwrap();
        directory
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        let usernames: Vec<String> = directory.list().into_iter().map(|u| u.username).collect();
        assert_eq!(usernames, vec!["ash", "morgana", "rook"]);
    }

    #[test]
    fn test_clones_share_storage() {
        let directory = UserDirectory::new();
        let clone = directory.clone();

        clone
            .insert(sample_user("rook", "rook@example.com"))
            .unwrap();

        assert!(directory.find_by_username("rook").is_some());
    }
}
