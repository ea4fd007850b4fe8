use async_trait::async_trait;

use super::domain::IsMe;
use crate::errors::StoreError;

/// Persistence of the record set with a uniqueness constraint on `name`.
///
/// `add` must enforce uniqueness atomically inside the store; callers may
/// pre-check with `get`, but that check alone does not prevent duplicates.
#[async_trait]
pub trait IsMeStore: Send + Sync {
    /// Every stored record in store order; empty when there are none.
    async fn get_all(&self) -> Result<Vec<IsMe>, StoreError>;
    /// The record named `name`, or `None`.
    async fn get(&self, name: &str) -> Result<Option<IsMe>, StoreError>;
    /// Insert a record; `DuplicateKey` if the name is already present.
    async fn add(&self, me: &IsMe) -> Result<(), StoreError>;
    /// Delete every record named `name`. Removing nothing is not an error.
    async fn remove(&self, name: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and demos.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MemoryIsMeStore {
        records: RwLock<Vec<IsMe>>, // insertion order
    }

    impl MemoryIsMeStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Start with `records` already present. Later duplicates are dropped.
        pub fn seeded<I>(records: I) -> Self
        where
            I: IntoIterator<Item = IsMe>,
        {
            let mut seen: Vec<IsMe> = Vec::new();
            for r in records {
                if !seen.iter().any(|s| s.name == r.name) {
                    seen.push(r);
                }
            }
            Self { records: RwLock::new(seen) }
        }
    }

    #[async_trait]
    impl IsMeStore for MemoryIsMeStore {
        async fn get_all(&self) -> Result<Vec<IsMe>, StoreError> {
            Ok(self.records.read().await.clone())
        }

        async fn get(&self, name: &str) -> Result<Option<IsMe>, StoreError> {
            let records = self.records.read().await;
            Ok(records.iter().find(|r| r.name == name).cloned())
        }

        async fn add(&self, me: &IsMe) -> Result<(), StoreError> {
            models::isme::validate_name(&me.name)?;
            // check and insert under one write lock
            let mut records = self.records.write().await;
            if records.iter().any(|r| r.name == me.name) {
                return Err(StoreError::DuplicateKey(me.name.clone()));
            }
            records.push(me.clone());
            Ok(())
        }

        async fn remove(&self, name: &str) -> Result<(), StoreError> {
            self.records.write().await.retain(|r| r.name != name);
            Ok(())
        }
    }
}
