use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use service::errors::StoreError;
use service::isme::IsMe;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Body of the 400 returned when the name is already on the list.
pub const ALREADY_ME: &str = "That is already me";

fn already_me() -> Response {
    (StatusCode::BAD_REQUEST, ALREADY_ME).into_response()
}

#[utoipa::path(
    get, path = "/rest/isme/{name}", tag = "isme",
    params(("name" = String, Path, description = "Name to look up")),
    responses(
        (status = 200, description = "Name is on the list"),
        (status = 404, description = "Name is not on the list"),
        (status = 500, description = "Store error")
    )
)]
pub async fn that_is_me(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    match state.membership.that_is_me(&name).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Ok(StatusCode::NOT_FOUND),
        Err(e) => Err(JsonApiError::store(e)),
    }
}

#[utoipa::path(
    put, path = "/rest/isme/{name}", tag = "isme",
    params(("name" = String, Path, description = "Name to add")),
    responses(
        (status = 201, description = "Added"),
        (status = 400, description = "That is already me", body = String),
        (status = 500, description = "Store error")
    )
)]
pub async fn is_me(State(state): State<ServerState>, Path(name): Path<String>) -> Response {
    match state.membership.that_is_me(&name).await {
        Ok(true) => return already_me(),
        Ok(false) => {}
        Err(e) => return JsonApiError::store(e).into_response(),
    }

    match state.membership.is_me(&name).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        // another request added it between the check and the insert
        Err(StoreError::DuplicateKey(_)) => {
            info!(%name, "duplicate insert rejected by store");
            already_me()
        }
        Err(StoreError::Validation(msg)) => {
            warn!(%name, %msg, "rejected name");
            (StatusCode::BAD_REQUEST, msg).into_response()
        }
        Err(e) => JsonApiError::store(e).into_response(),
    }
}

#[utoipa::path(
    delete, path = "/rest/isme/{name}", tag = "isme",
    params(("name" = String, Path, description = "Name to remove")),
    responses(
        (status = 204, description = "Removed, or was not there"),
        (status = 500, description = "Store error")
    )
)]
pub async fn is_not_me(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.membership.is_not_me(&name).await.map_err(JsonApiError::store)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/rest/isme", tag = "isme",
    responses(
        (status = 200, description = "Everyone on the list, in store order", body = [IsMe]),
        (status = 500, description = "Store error")
    )
)]
pub async fn all_of_me(State(state): State<ServerState>) -> Result<Json<Vec<IsMe>>, JsonApiError> {
    let all = state.membership.all_of_me().await.map_err(JsonApiError::store)?;
    Ok(Json(all))
}
