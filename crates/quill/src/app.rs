use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        articles::{create_article, get_article, list_articles},
        health::{healthz, livez},
        tags::{create_tag, list_tags},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Permissive CORS: any origin, with the headers browsers send on
    // JSON posts.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ]);

    // API routes with CORS
    let api_routes = Router::new()
        // Single-article lookup keeps its legacy query-parameter contract
        .route("/article", get(get_article))
        .route("/articles", get(list_articles).post(create_article))
        .route("/tags", get(list_tags).post(create_tag))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use quill_core::blog::{Article, REGISTERED_TIME_FORMAT};
    use quill_core::storage::ArticleRepository;

    use crate::{
        config::Config,
        storage::{InMemoryFileStore, InMemoryRepository},
    };

    /// Build a test state with handles on the concrete backends so tests
    /// can observe stored records and blobs directly.
    fn test_state() -> (AppState, Arc<InMemoryRepository>, Arc<InMemoryFileStore>) {
        let repo = Arc::new(InMemoryRepository::new());
        let files = Arc::new(InMemoryFileStore::new());
        let state = AppState::build(repo.clone(), repo.clone(), files.clone(), &Config::default());
        (state, repo, files)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_backend() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["storage"], "inmemory");
    }

    #[tokio::test]
    async fn test_create_and_get_article() {
        let (state, repo, _) = test_state();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_post(
                "/api/articles",
                r##"{"title":"First post","content":"# Hello","extension":"text/markdown"}"##,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");

        // Discover the minted key through the repository
        let stored = repo.list_articles(50).await.unwrap();
        assert_eq!(stored.len(), 1);
        let key = &stored[0].storage_key;
        assert!(Uuid::parse_str(key).is_ok(), "text key is a bare UUID");

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/article?key={key}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let article: Article = serde_json::from_slice(&body).unwrap();

        assert_eq!(article.title, "First post");
        assert_eq!(article.content, "# Hello");
        assert!(article.filename.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_article_returns_404() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/article?key=no-such-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_list_articles_never_exceeds_cap() {
        let (state, repo, _) = test_state();
        let app = create_app(state);

        for i in 0..60 {
            repo.create_article(&Article::new(format!("Title {i}"), "Body"))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/articles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let articles: Vec<Article> = serde_json::from_slice(&body).unwrap();
        assert_eq!(articles.len(), 50);
    }

    #[tokio::test]
    async fn test_create_article_with_attachment() {
        let (state, repo, files) = test_state();
        let app = create_app(state);

        let response = app
            .oneshot(json_post(
                "/api/articles",
                r#"{"title":"Photo","content":"pic","extension":"image/png","file":"data:image/png;base64,aGVsbG8="}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let stored = repo.list_articles(50).await.unwrap();
        assert_eq!(stored.len(), 1);
        let article = &stored[0];

        // Composite key: {uuid}.png, filename is the bare uuid
        let (id, suffix) = article.storage_key.split_once('.').unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(suffix, "png");
        assert_eq!(article.filename, id);

        // The decoded payload landed under the same key
        let file = files.get_file(&article.storage_key).await.unwrap();
        assert_eq!(file.bytes, b"hello");
        assert_eq!(file.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_malformed_extension_is_rejected() {
        let (state, repo, files) = test_state();
        let app = create_app(state);

        let response = app
            .oneshot(json_post(
                "/api/articles",
                r#"{"title":"Photo","content":"pic","extension":"png","file":"data:,aGVsbG8="}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Invalid extension"));

        // The key needs the subtype, so nothing was written anywhere
        assert!(repo.list_articles(50).await.unwrap().is_empty());
        assert_eq!(files.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_base64_leaves_orphaned_record() {
        let (state, repo, files) = test_state();
        let app = create_app(state);

        let response = app
            .oneshot(json_post(
                "/api/articles",
                r#"{"title":"Photo","content":"pic","extension":"image/png","file":"data:image/png;base64,!!!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The record write precedes decoding and is not rolled back: the
        // article survives as an orphan with no attachment blob.
        let stored = repo.list_articles(50).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].storage_key.ends_with(".png"));
        assert_eq!(files.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_identical_creates_mint_distinct_records() {
        let (state, repo, _) = test_state();
        let app = create_app(state);

        let body = r#"{"title":"Same","content":"Same","extension":"text/plain"}"#;
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(json_post("/api/articles", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let stored = repo.list_articles(50).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].storage_key, stored[1].storage_key);
    }

    #[tokio::test]
    async fn test_create_tag_and_list() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_post("/api/tags", r#"{"tag":"golang"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/tags")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let tags: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0]["tag"], "golang");

        let registered_time = tags[0]["registered_time"].as_str().unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(registered_time, REGISTERED_TIME_FORMAT).is_ok(),
            "unexpected timestamp shape: {registered_time}"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_post("/api/articles", "{not json"))
            .await
            .unwrap();

        // The extractor rejects the body outright instead of continuing
        // with a zero-valued payload.
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/articles")
                    .header("Origin", "http://example.com")
                    .header("Access-Control-Request-Method", "POST")
                    .header("Access-Control-Request-Headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
