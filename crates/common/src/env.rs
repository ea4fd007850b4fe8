//! Environment/runtime helpers
//!
//! Sanity checks run once at startup before the router is built.

use tracing::warn;

/// Warn when the static asset directory is missing.
///
/// The page and REST routes work without it; only the browser script
/// and other static files will 404.
pub async fn ensure_env(public_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(public_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{public_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%public_dir, "public assets directory not found; static assets may 404");
            Ok(())
        }
    }
}
