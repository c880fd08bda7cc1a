//! Folder routes. Every handler works on the caller's folders only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use noteful_core::{Folder, FolderId, NameInput, parse_id, validate::check_body_id};
use noteful_store::NewFolder;

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/folders
async fn list_folders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<Folder>>> {
    let rows = state.store().list_folders(user.user_id).await?;
    Ok(Json(rows.into_iter().map(Folder::from).collect()))
}

/// GET /api/folders/{id}
async fn get_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Folder>> {
    let id = FolderId::from_uuid(parse_id(&id, "id")?);
    let row = state.store().get_folder(user.user_id, id).await?;
    Ok(Json(row.into()))
}

/// POST /api/folders
async fn create_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(body): JsonBody,
) -> ApiResult<impl IntoResponse> {
    let input = NameInput::from_json(&body)?;
    let row = state
        .store()
        .insert_folder(&NewFolder::new(input.name, user.user_id))
        .await?;
    let folder = Folder::from(row);

    tracing::info!(folder_id = %folder.id, user_id = %user.user_id, "Folder created");

    let location = format!("/api/folders/{}", folder.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(folder)))
}

/// PUT /api/folders/{id}
async fn update_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Folder>> {
    let input = NameInput::from_json(&body)?;
    let id = parse_id(&id, "id")?;
    check_body_id(&body, id)?;

    let row = state
        .store()
        .rename_folder(user.user_id, FolderId::from_uuid(id), &input.name)
        .await?;
    Ok(Json(row.into()))
}

/// DELETE /api/folders/{id}
///
/// Notes in the folder survive with their folder cleared.
async fn delete_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = FolderId::from_uuid(parse_id(&id, "id")?);
    state.store().delete_folder(user.user_id, id).await?;

    tracing::info!(folder_id = %id, user_id = %user.user_id, "Folder deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Build folder routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/folders", get(list_folders).post(create_folder))
        .route(
            "/api/folders/{id}",
            get(get_folder).put(update_folder).delete(delete_folder),
        )
}
