use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{User, UserWriteModel};
use crate::errors::ServiceError;

/// Storage abstraction for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, in insertion order.
    async fn list(&self) -> Vec<User>;
    async fn get(&self, id: Uuid) -> Option<User>;
    async fn create(&self, input: UserWriteModel) -> User;
    async fn update(&self, id: Uuid, input: UserWriteModel) -> Result<User, ServiceError>;
}

/// Scripted store for handler tests: returns exactly what it was given,
/// without applying any defaults.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserStore {
        users: Mutex<Vec<User>>,
        on_create: Mutex<Option<User>>,
    }

    impl MockUserStore {
        pub fn with_users(users: Vec<User>) -> Self {
            Self { users: Mutex::new(users), on_create: Mutex::new(None) }
        }

        /// Make `create` return `user` regardless of input.
        pub fn returning_on_create(self, user: User) -> Self {
            *self.on_create.lock().unwrap() = Some(user);
            self
        }
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn list(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }

        async fn get(&self, id: Uuid) -> Option<User> {
            self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
        }

        async fn create(&self, input: UserWriteModel) -> User {
            let user = self.on_create.lock().unwrap().clone().unwrap_or_else(|| User {
                id: input.id.unwrap_or_else(Uuid::nil),
                name: input.name.unwrap_or_default(),
                emoji: input.emoji.unwrap_or_default(),
            });
            self.users.lock().unwrap().push(user.clone());
            user
        }

        async fn update(&self, id: Uuid, input: UserWriteModel) -> Result<User, ServiceError> {
            let mut users = self.users.lock().unwrap();
            let existing = users.iter_mut().find(|u| u.id == id).ok_or(ServiceError::NotFound(id))?;
            if let Some(name) = input.name { existing.name = name; }
            if let Some(emoji) = input.emoji { existing.emoji = emoji; }
            Ok(existing.clone())
        }
    }
}
