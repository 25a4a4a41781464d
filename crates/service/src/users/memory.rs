use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use super::domain::{User, UserWriteModel};
use super::repository::UserStore;
use crate::errors::ServiceError;

/// Records every process starts with, in listing order.
const SEED: [(&str, &str); 3] = [
    ("Bramble Fright", "\u{1F47B}"),
    ("Sylvie Scream", "\u{1F383}"),
    ("Eve Eerie", "\u{1F9D9}"),
];

/// Ordered map: `order` holds each id once, in first-insert order.
#[derive(Default)]
struct UserTable {
    order: Vec<Uuid>,
    rows: HashMap<Uuid, User>,
}

impl UserTable {
    /// Insert or replace; a replaced id keeps its original position.
    fn put(&mut self, user: User) -> Option<User> {
        let id = user.id;
        let previous = self.rows.insert(id, user);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    fn values(&self) -> Vec<User> {
        self.order.iter().filter_map(|id| self.rows.get(id).cloned()).collect()
    }
}

/// Process-local user store guarded by a single lock. Nothing survives a restart.
pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

impl InMemoryUserStore {
    /// Build a store holding the three seed users.
    pub fn new() -> Arc<Self> {
        let mut table = UserTable::default();
        for (name, emoji) in SEED {
            table.put(User::from_write(UserWriteModel::named(name, emoji)));
        }
        Arc::new(Self { inner: RwLock::new(table) })
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.inner.read().await.values()
    }

    async fn get(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    async fn create(&self, input: UserWriteModel) -> User {
        let user = User::from_write(input);
        let mut table = self.inner.write().await;
        if table.put(user.clone()).is_some() {
            // Caller-supplied ids are not checked for uniqueness.
            warn!(id = %user.id, "create replaced an existing user");
        } else {
            debug!(id = %user.id, "user created");
        }
        user
    }

    async fn update(&self, id: Uuid, input: UserWriteModel) -> Result<User, ServiceError> {
        let mut table = self.inner.write().await;
        let existing = table.rows.get(&id).ok_or(ServiceError::NotFound(id))?;
        let updated = existing.merged_with(input);
        table.put(updated.clone());
        debug!(%id, "user updated");
        Ok(updated)
    }
}
