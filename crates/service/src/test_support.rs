#![cfg(test)]
use std::sync::Arc;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use models::db::{connect_and_migrate, SQLITE_MEMORY_URL};

use crate::errors::StoreError;
use crate::isme::{IsMe, IsMeStore};

/// A fresh migrated in-memory SQLite database per call, so tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: SQLITE_MEMORY_URL.into(), ..DatabaseConfig::default() };
    connect_and_migrate(&cfg).await
}

/// Behaviour every `IsMeStore` must show, starting from an empty store.
pub async fn assert_store_contract(store: &dyn IsMeStore) {
    assert!(store.get_all().await.unwrap().is_empty(), "empty store lists nothing");
    assert_eq!(store.get("me").await.unwrap(), None);

    // round trip
    store.add(&IsMe::new("me")).await.unwrap();
    assert_eq!(store.get("me").await.unwrap(), Some(IsMe::new("me")));
    store.remove("me").await.unwrap();
    assert_eq!(store.get("me").await.unwrap(), None);

    // removing an absent name changes nothing
    store.add(&IsMe::new("other")).await.unwrap();
    store.remove("me").await.unwrap();
    assert_eq!(store.get_all().await.unwrap(), vec![IsMe::new("other")]);

    // second add of the same name is rejected and leaves one record
    store.add(&IsMe::new("me")).await.unwrap();
    let err = store.add(&IsMe::new("me")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(ref n) if n == "me"), "got {err:?}");
    let mes = store.get_all().await.unwrap().into_iter().filter(|r| r.name == "me").count();
    assert_eq!(mes, 1);
}

/// Many tasks add the same name at once; exactly one wins.
pub async fn assert_concurrent_adds<S>(store: Arc<S>)
where
    S: IsMeStore + 'static,
{
    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move { store.add(&IsMe::new("racer")).await }));
    }

    let mut created = 0;
    let mut duplicates = 0;
    for h in handles {
        match h.await.unwrap() {
            Ok(()) => created += 1,
            Err(StoreError::DuplicateKey(_)) => duplicates += 1,
            Err(e) => panic!("unexpected store error: {e}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.get_all().await.unwrap(), vec![IsMe::new("racer")]);
}
