//! Tag routes. Every handler works on the caller's tags only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use noteful_core::{NameInput, Tag, TagId, parse_id, validate::check_body_id};
use noteful_store::NewTag;

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/tags
async fn list_tags(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<Tag>>> {
    let rows = state.store().list_tags(user.user_id).await?;
    Ok(Json(rows.into_iter().map(Tag::from).collect()))
}

/// GET /api/tags/{id}
async fn get_tag(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Tag>> {
    let id = TagId::from_uuid(parse_id(&id, "id")?);
    let row = state.store().get_tag(user.user_id, id).await?;
    Ok(Json(row.into()))
}

/// POST /api/tags
async fn create_tag(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(body): JsonBody,
) -> ApiResult<impl IntoResponse> {
    let input = NameInput::from_json(&body)?;
    let row = state
        .store()
        .insert_tag(&NewTag::new(input.name, user.user_id))
        .await?;
    let tag = Tag::from(row);

    tracing::info!(tag_id = %tag.id, user_id = %user.user_id, "Tag created");

    let location = format!("/api/tags/{}", tag.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(tag)))
}

/// PUT /api/tags/{id}
async fn update_tag(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Tag>> {
    let input = NameInput::from_json(&body)?;
    let id = parse_id(&id, "id")?;
    check_body_id(&body, id)?;

    let row = state
        .store()
        .rename_tag(user.user_id, TagId::from_uuid(id), &input.name)
        .await?;
    Ok(Json(row.into()))
}

/// DELETE /api/tags/{id}
///
/// The tag is removed from every note that carried it.
async fn delete_tag(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = TagId::from_uuid(parse_id(&id, "id")?);
    state.store().delete_tag(user.user_id, id).await?;

    tracing::info!(tag_id = %id, user_id = %user.user_id, "Tag deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Build tag routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tags", get(list_tags).post(create_tag))
        .route(
            "/api/tags/{id}",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
}
