//! Note routes: filtered listing and owner-scoped CRUD.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use noteful_core::{
    Note, NoteDraft, NoteFilter, NoteId, NoteListParams, NotePatch, parse_id,
    validate::check_body_id,
};
use noteful_store::NewNote;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/notes?searchTerm=&folderId=&tagId=
///
/// All supplied filters must match. Most recently updated notes come first.
async fn list_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    params: Result<Query<NoteListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Note>>> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let filter = NoteFilter::try_from(params)?;

    let rows = state.store().list_notes(user.user_id, &filter).await?;
    tracing::debug!(user_id = %user.user_id, count = rows.len(), "Listed notes");

    Ok(Json(rows.into_iter().map(Note::from).collect()))
}

/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Note>> {
    let id = NoteId::from_uuid(parse_id(&id, "id")?);
    let row = state.store().get_note(user.user_id, id).await?;
    Ok(Json(row.into()))
}

/// POST /api/notes
async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(body): JsonBody,
) -> ApiResult<impl IntoResponse> {
    let draft = NoteDraft::from_json(&body)?;
    let row = state
        .store()
        .insert_note(&NewNote::from_draft(draft, user.user_id))
        .await?;
    let note = Note::from(row);

    tracing::info!(note_id = %note.id, user_id = %user.user_id, "Note created");

    let location = format!("/api/notes/{}", note.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(note)))
}

/// PUT /api/notes/{id}
///
/// Only the fields present in the body change.
async fn update_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Note>> {
    let id = parse_id(&id, "id")?;
    check_body_id(&body, id)?;
    let patch = NotePatch::from_json(&body)?;

    let row = state
        .store()
        .update_note(user.user_id, NoteId::from_uuid(id), &patch)
        .await?;
    Ok(Json(row.into()))
}

/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = NoteId::from_uuid(parse_id(&id, "id")?);
    state.store().delete_note(user.user_id, id).await?;

    tracing::info!(note_id = %id, user_id = %user.user_id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
