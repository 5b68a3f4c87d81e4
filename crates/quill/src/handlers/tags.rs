use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use quill_core::blog::{CreateTagRequest, Tag};

use crate::{handlers::ApiError, state::AppState};

/// Record a tag (POST /api/tags).
///
/// Tags are an append-only log with no linkage to articles; labels are
/// not required to be unique.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tag = Tag::new(payload.tag);

    state.tag_repo.create_tag(&tag).await?;

    tracing::info!(tag = %tag.tag, "Recorded tag");

    Ok((StatusCode::OK, "OK"))
}

/// List tags (GET /api/tags).
///
/// Same capped scan semantics as the article listing.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, ApiError> {
    let tags = state.tag_repo.list_tags(state.scan_limit).await?;

    Ok(Json(tags))
}
