use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::IsMe;
use super::repository::IsMeStore;
use crate::errors::StoreError;

/// Membership operations over an injected record store.
///
/// No business rules live here; each call maps onto one store call.
#[derive(Clone)]
pub struct MembershipService {
    store: Arc<dyn IsMeStore>,
}

impl MembershipService {
    pub fn new(store: Arc<dyn IsMeStore>) -> Self {
        Self { store }
    }

    /// Whether `name` is currently on the list.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::isme::{IsMe, MembershipService, repository::memory::MemoryIsMeStore};
    /// let store = Arc::new(MemoryIsMeStore::seeded([IsMe::new("Rory")]));
    /// let svc = MembershipService::new(store);
    /// assert!(tokio_test::block_on(svc.that_is_me("Rory")).unwrap());
    /// assert!(!tokio_test::block_on(svc.that_is_me("Dylan")).unwrap());
    /// ```
    #[instrument(skip(self))]
    pub async fn that_is_me(&self, name: &str) -> Result<bool, StoreError> {
        let found = self.store.get(name).await?.is_some();
        debug!(found, "that_is_me");
        Ok(found)
    }

    /// Put `name` on the list. Fails with `DuplicateKey` if it is already there.
    #[instrument(skip(self))]
    pub async fn is_me(&self, name: &str) -> Result<(), StoreError> {
        self.store.add(&IsMe::new(name)).await?;
        info!("isme_added");
        Ok(())
    }

    /// Take `name` off the list; a no-op when it is absent.
    #[instrument(skip(self))]
    pub async fn is_not_me(&self, name: &str) -> Result<(), StoreError> {
        self.store.remove(name).await?;
        info!("isme_removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn all_of_me(&self) -> Result<Vec<IsMe>, StoreError> {
        self.store.get_all().await
    }
}
