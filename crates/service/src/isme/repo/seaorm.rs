use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::StoreError;
use crate::isme::domain::IsMe;
use crate::isme::repository::IsMeStore;

/// Store backed by the `isme` table. The table's unique index on `name`
/// is what rejects concurrent duplicate inserts.
#[derive(Clone)]
pub struct SeaOrmIsMeStore {
    pub db: DatabaseConnection,
}

impl SeaOrmIsMeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IsMeStore for SeaOrmIsMeStore {
    async fn get_all(&self) -> Result<Vec<IsMe>, StoreError> {
        let rows = models::isme::list(&self.db).await?;
        Ok(rows.into_iter().map(IsMe::from).collect())
    }

    async fn get(&self, name: &str) -> Result<Option<IsMe>, StoreError> {
        let row = models::isme::find_by_name(&self.db, name).await?;
        tracing::debug!(%name, found = row.is_some(), "isme lookup");
        Ok(row.map(IsMe::from))
    }

    async fn add(&self, me: &IsMe) -> Result<(), StoreError> {
        models::isme::create(&self.db, &me.name).await?;
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), StoreError> {
        let removed = models::isme::delete_by_name(&self.db, name).await?;
        tracing::debug!(%name, removed, "isme rows deleted");
        Ok(())
    }
}
