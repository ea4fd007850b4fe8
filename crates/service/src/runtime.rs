//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can run its
//! startup checks through the service layer.

/// Warn when the static asset directory is missing.
pub async fn ensure_env(public_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(public_dir).await
}
