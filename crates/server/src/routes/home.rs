use axum::{extract::State, response::Html};

use crate::errors::JsonApiError;
use crate::page;
use crate::routes::ServerState;

/// Render the list of everyone who is me.
pub async fn home_page(State(state): State<ServerState>) -> Result<Html<String>, JsonApiError> {
    let folks = state.membership.all_of_me().await.map_err(JsonApiError::store)?;
    Ok(Html(page::render_home(&folks)))
}
