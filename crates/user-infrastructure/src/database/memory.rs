//! In-process user store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use user_core::domain::{User, UserFields};
use user_core::error::DomainError;
use user_core::repositories::UserRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

/// Same contract as the PostgreSQL table: ids start at 1, are never reused,
/// and iteration is in id order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, fields: &UserFields) -> Result<User, DomainError> {
        let mut table = self.table.write();
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::DatabaseError("id sequence exhausted".into()))?;
        let user = User::from_fields(table.last_id, fields.clone());
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, fields: &UserFields) -> Result<Option<User>, DomainError> {
        let mut table = self.table.write();
        Ok(table.rows.get_mut(&id).map(|user| {
            user.apply(fields.clone());
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> UserFields {
        UserFields {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone_number: "111".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(&fields("A")).await.unwrap();
        let b = repo.create(&fields("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(repo.delete(2).await.unwrap());
        let c = repo.create(&fields("C")).await.unwrap();
        assert_eq!(c.id, 3);

        let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn missing_id_leaves_table_untouched() {
        let repo = InMemoryUserRepository::new();
        repo.create(&fields("A")).await.unwrap();

        assert_eq!(repo.update(9, &fields("Z")).await.unwrap(), None);
        assert!(!repo.delete(9).await.unwrap());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "A");
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let repo = InMemoryUserRepository::new();
        repo.create(&fields("A")).await.unwrap();

        let changed = UserFields {
            name: "A2".into(),
            email: "a2@x.com".into(),
            phone_number: "999".into(),
            is_active: false,
        };
        let updated = repo.update(1, &changed).await.unwrap().unwrap();
        assert_eq!(updated.fields(), changed);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(updated));
    }
}
