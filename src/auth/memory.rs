//! In-process stores for handler tests.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::{
    repo::{StoreError, UserStore},
    repo_types::{NewUser, User},
};

/// Keyed by email, so uniqueness holds the same way the unique index does in Postgres.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.get(email))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&new_user.email) {
            return Err(StoreError::DuplicateKey);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

/// Behaves like a store whose database went away.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _new_user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
}

/// Hides a racing signup: lookups always miss, inserts still hit the uniqueness check.
pub struct BlindLookupStore(pub InMemoryUserStore);

#[async_trait]
impl UserStore for BlindLookupStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.0.create(new_user).await
    }
}
