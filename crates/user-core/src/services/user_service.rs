// ============================================================================
// User Core - User Service
// File: crates/user-core/src/services/user_service.rs
// ============================================================================
//! The five user operations on top of the repository port

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{User, UserFields};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Stateless between calls; every operation goes straight to storage.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a user. No field validation and no duplicate detection.
    pub async fn create_user(&self, fields: UserFields) -> Result<User, DomainError> {
        let user = self.user_repo.create(&fields).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, DomainError> {
        self.user_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!(user_id = id, "GetUser: not found");
            DomainError::UserNotFound(id)
        })
    }

    /// Overwrite all four mutable fields of an existing user.
    pub async fn update_user(&self, id: i32, fields: UserFields) -> Result<User, DomainError> {
        let user = self.user_repo.update(id, &fields).await?.ok_or_else(|| {
            warn!(user_id = id, "UpdateUser: not found");
            DomainError::UserNotFound(id)
        })?;
        info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Remove a user, returning the removed id.
    pub async fn delete_user(&self, id: i32) -> Result<i32, DomainError> {
        if !self.user_repo.delete(id).await? {
            warn!(user_id = id, "DeleteUser: not found");
            return Err(DomainError::UserNotFound(id));
        }
        info!(user_id = id, "User deleted");
        Ok(id)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.user_repo.find_all().await?;
        debug!(count = users.len(), "Users listed");
        Ok(users)
    }

    pub async fn check_storage(&self) -> Result<(), DomainError> {
        self.user_repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use mockall::predicate::eq;

    fn fields(name: &str, active: bool) -> UserFields {
        UserFields {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone_number: "111".to_string(),
            is_active: active,
        }
    }

    fn service(repo: MockUserRepository) -> UserService {
        UserService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_returns_row_with_assigned_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|f| f.name == "A" && f.is_active)
            .times(1)
            .returning(|f| Ok(User::from_fields(1, f.clone())));

        let user = service(repo).create_user(fields("A", true)).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(42)).times(1).returning(|_| Ok(None));

        let err = service(repo).get_user(42).await.unwrap_err();
        assert_eq!(err, DomainError::UserNotFound(42));
        assert_eq!(err.to_string(), "User with ID 42 not found");
    }

    #[tokio::test]
    async fn update_passes_every_field_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|id, f| *id == 1 && f.name == "A2" && f.phone_number == "111" && !f.is_active)
            .times(1)
            .returning(|id, f| Ok(Some(User::from_fields(id, f.clone()))));

        let user = service(repo).update_user(1, fields("A2", false)).await.unwrap();
        assert_eq!(user.name, "A2");
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn update_missing_user_stops_at_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().times(1).returning(|_, _| Ok(None));
        repo.expect_find_by_id().times(0);

        let err = service(repo).update_user(7, fields("X", true)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_returns_id_or_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(2)).times(1).returning(|_| Ok(true));
        repo.expect_delete().with(eq(3)).times(1).returning(|_| Ok(false));
        let svc = service(repo);

        assert_eq!(svc.delete_user(2).await.unwrap(), 2);
        assert_eq!(svc.delete_user(3).await.unwrap_err(), DomainError::UserNotFound(3));
    }

    #[tokio::test]
    async fn storage_errors_propagate_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(DomainError::DatabaseUnavailable("pool timed out".into())));

        let err = service(repo).list_users().await.unwrap_err();
        assert_eq!(err, DomainError::DatabaseUnavailable("pool timed out".into()));
    }
}
