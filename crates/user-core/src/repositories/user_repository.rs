//! User repository trait (port)

use async_trait::async_trait;

use crate::domain::{User, UserFields};
use crate::error::DomainError;

/// Storage for user rows. Implementations must make `update` and `delete`
/// leave storage untouched when the id is absent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a row and returns it with the storage-assigned id.
    async fn create(&self, fields: &UserFields) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
    /// All rows in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    /// `None` when no row has this id.
    async fn update(&self, id: i32, fields: &UserFields) -> Result<Option<User>, DomainError>;
    /// `false` when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
    /// Cheap round-trip used by readiness probes.
    async fn ping(&self) -> Result<(), DomainError>;
}
