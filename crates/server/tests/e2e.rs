use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use configs::DatabaseConfig;
use server::routes::isme::ALREADY_ME;
use server::startup::{build_app, open_store};
use service::errors::StoreError;
use service::isme::{repository::memory::MemoryIsMeStore, IsMe, IsMeStore};

const NO_PUBLIC_DIR: &str = "/nonexistent-public-dir-for-tests";

fn seeded() -> Router {
    let store = MemoryIsMeStore::seeded([IsMe::new("Rory"), IsMe::new("Kieran")]);
    build_app(Arc::new(store), NO_PUBLIC_DIR)
}

async fn send(app: &Router, method: Method, uri: &str) -> anyhow::Result<(StatusCode, Option<String>, String)> {
    let req = Request::builder().method(method).uri(uri).body(Body::empty())?;
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, content_type, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn get_isme_reports_presence() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, body) = send(&app, Method::GET, "/rest/isme/Rory").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _, _) = send(&app, Method::GET, "/rest/isme/Dylan").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn get_all_lists_in_store_order_as_json() -> anyhow::Result<()> {
    let app = seeded();
    let (status, content_type, body) = send(&app, Method::GET, "/rest/isme").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(json, serde_json::json!([{"name": "Rory"}, {"name": "Kieran"}]));
    Ok(())
}

#[tokio::test]
async fn put_adds_new_name_and_rejects_existing() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, _) = send(&app, Method::PUT, "/rest/isme/Dylan").await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _, _) = send(&app, Method::GET, "/rest/isme/Dylan").await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(&app, Method::PUT, "/rest/isme/Kieran").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ALREADY_ME);
    assert_eq!(body, "That is already me");
    Ok(())
}

#[tokio::test]
async fn delete_is_idempotent() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, _) = send(&app, Method::DELETE, "/rest/isme/Kieran").await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = send(&app, Method::GET, "/rest/isme/Kieran").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, Method::DELETE, "/rest/isme/Kieran").await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn percent_encoded_names_are_decoded() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, _) = send(&app, Method::PUT, "/rest/isme/Ryan%20Gosling").await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, _, body) = send(&app, Method::GET, "/rest/isme").await?;
    let json: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(json[2]["name"], "Ryan Gosling");
    Ok(())
}

#[tokio::test]
async fn overlong_name_is_bad_request() -> anyhow::Result<()> {
    let app = seeded();
    let uri = format!("/rest/isme/{}", "x".repeat(300));
    let (status, _, body) = send(&app, Method::PUT, &uri).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body, ALREADY_ME);
    Ok(())
}

#[tokio::test]
async fn control_characters_in_name_are_bad_request() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, body) = send(&app, Method::PUT, "/rest/isme/a%00b").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body, ALREADY_ME);

    let (_, _, body) = send(&app, Method::GET, "/rest/isme").await?;
    let json: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn home_page_lists_everyone() -> anyhow::Result<()> {
    let app = seeded();
    let (status, content_type, body) = send(&app, Method::GET, "/").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/html"));
    assert!(body.contains("Rory"));
    assert!(body.contains("Kieran"));
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = seeded();
    let (status, _, body) = send(&app, Method::GET, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body)?, serde_json::json!({"status": "ok"}));

    let (status, _, body) = send(&app, Method::GET, "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body)?;
    assert!(doc["paths"]["/rest/isme/{name}"].is_object());
    Ok(())
}

#[tokio::test]
async fn sql_store_behaves_like_memory_store() -> anyhow::Result<()> {
    let cfg = DatabaseConfig { url: models::db::SQLITE_MEMORY_URL.into(), ..DatabaseConfig::default() };
    let opened = open_store(&cfg).await?;
    opened.store.add(&IsMe::new("Rory")).await?;
    opened.store.add(&IsMe::new("Kieran")).await?;
    let app = build_app(opened.store, NO_PUBLIC_DIR);

    let (status, _, body) = send(&app, Method::GET, "/rest/isme").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body)?, serde_json::json!([{"name": "Rory"}, {"name": "Kieran"}]));

    assert_eq!(send(&app, Method::PUT, "/rest/isme/Dylan").await?.0, StatusCode::CREATED);
    assert_eq!(send(&app, Method::GET, "/rest/isme/Dylan").await?.0, StatusCode::OK);
    let (status, _, body) = send(&app, Method::PUT, "/rest/isme/Kieran").await?;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, ALREADY_ME));
    assert_eq!(send(&app, Method::DELETE, "/rest/isme/Kieran").await?.0, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, Method::GET, "/rest/isme/Kieran").await?.0, StatusCode::NOT_FOUND);
    Ok(())
}

/// Store whose backend is gone.
struct DownStore;

#[async_trait]
impl IsMeStore for DownStore {
    async fn get_all(&self) -> Result<Vec<IsMe>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn get(&self, _name: &str) -> Result<Option<IsMe>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn add(&self, _me: &IsMe) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn remove(&self, _name: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn store_failures_become_500_with_detail() -> anyhow::Result<()> {
    let app = build_app(Arc::new(DownStore), NO_PUBLIC_DIR);
    for (method, uri) in [
        (Method::GET, "/rest/isme/Rory"),
        (Method::PUT, "/rest/isme/Rory"),
        (Method::DELETE, "/rest/isme/Rory"),
        (Method::GET, "/rest/isme"),
        (Method::GET, "/"),
    ] {
        let (status, _, body) = send(&app, method.clone(), uri).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        let json: serde_json::Value = serde_json::from_str(&body)?;
        assert!(json["detail"].as_str().unwrap_or_default().contains("connection refused"), "{method} {uri}: {body}");
    }
    Ok(())
}

/// Store that loses the race: the pre-check says absent, the insert says duplicate.
struct RacingStore;

#[async_trait]
impl IsMeStore for RacingStore {
    async fn get_all(&self) -> Result<Vec<IsMe>, StoreError> {
        Ok(vec![])
    }
    async fn get(&self, _name: &str) -> Result<Option<IsMe>, StoreError> {
        Ok(None)
    }
    async fn add(&self, me: &IsMe) -> Result<(), StoreError> {
        Err(StoreError::DuplicateKey(me.name.clone()))
    }
    async fn remove(&self, _name: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn duplicate_from_store_after_precheck_is_already_me() -> anyhow::Result<()> {
    let app = build_app(Arc::new(RacingStore), NO_PUBLIC_DIR);
    let (status, _, body) = send(&app, Method::PUT, "/rest/isme/Rory").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ALREADY_ME);
    Ok(())
}
