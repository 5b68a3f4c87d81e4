use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use quill_core::blog::{
    decode_attachment, extension_subtype, Article, CreateArticleRequest, GetArticleQuery,
};

use crate::{handlers::ApiError, state::AppState};

/// Get a single article by storage key (GET /api/article?key=...).
///
/// A missing record is an explicit 404. The legacy behavior of answering
/// with a zero-valued article and a 200 status is intentionally not kept.
pub async fn get_article(
    State(state): State<AppState>,
    Query(query): Query<GetArticleQuery>,
) -> Result<Json<Article>, ApiError> {
    match state.article_repo.get_article(&query.key).await? {
        Some(article) => Ok(Json(article)),
        None => Err(ApiError::NotFound {
            entity: "Article",
            key: query.key,
        }),
    }
}

/// List articles (GET /api/articles).
///
/// An unfiltered scan capped at the configured limit, in store-native
/// order. Repeated calls may return different subsets as records are
/// added; there is no continuation token.
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.article_repo.list_articles(state.scan_limit).await?;

    Ok(Json(articles))
}

/// Create an article (POST /api/articles).
///
/// A non-empty `file` field selects attachment mode: the storage key
/// gains the extension subtype as suffix and the decoded payload is
/// uploaded to the blob store under the same key. The record write and
/// the upload are sequential and not transactional; a failure after the
/// record is committed leaves it behind with no attachment.
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<CreateArticleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.has_attachment() {
        let subtype = extension_subtype(&payload.extension)?;
        let article = Article::with_attachment(&payload.title, &payload.content, subtype);

        state.article_repo.create_article(&article).await?;

        // The record write precedes decoding: a bad payload aborts the
        // request but the record persists as an observable orphan with
        // no attachment.
        let bytes = decode_attachment(&payload.file)?;

        state
            .file_store
            .put_file(&article.storage_key, bytes, &payload.extension)
            .await?;

        tracing::info!(storage_key = %article.storage_key, "Created article with attachment");
    } else {
        let article = Article::new(&payload.title, &payload.content);

        state.article_repo.create_article(&article).await?;

        tracing::info!(storage_key = %article.storage_key, "Created article");
    }

    // Fixed success body kept for caller compatibility.
    Ok((StatusCode::OK, "OK"))
}
