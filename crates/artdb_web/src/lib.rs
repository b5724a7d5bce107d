use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", post(handlers::add_article))
        .route("/api/articles/:id", get(handlers::get_article))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use artdb_core::{Article, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use artdb_core::{ids, Article, NamedEntityRecognizer, NerRecord, Result, Summarizer};
    use artdb_ingest::Ingestor;
    use artdb_store::MemoryStorage;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use tower::ServiceExt;

    struct StubExtractor;

    #[async_trait]
    impl Summarizer for StubExtractor {
        async fn summarize(&self, _text: &str) -> Result<String> {
            Ok("Summary of text.".to_string())
        }
    }

    #[async_trait]
    impl NamedEntityRecognizer for StubExtractor {
        async fn ner(&self, _text: &str) -> Result<NerRecord> {
            Ok(NerRecord::default())
        }
    }

    fn state() -> AppState {
        let storage = Arc::new(MemoryStorage::new());
        let extractor = Arc::new(StubExtractor);
        let ingestor = Arc::new(Ingestor::new(
            extractor.clone(),
            extractor,
            storage.clone(),
        ));

        AppState { ingestor, storage }
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let app = create_app(state()).await;

        let article = Article {
            title: "Test Article".to_string(),
            url: "http://test.com".to_string(),
            author: "Test Author".to_string(),
            published_at: Utc::now(),
            body: "This is a test body.".to_string(),
            ..Article::default()
        };

        let request = Request::builder()
            .method("POST")
            .uri("/api/articles")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&article).unwrap()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let id = value["id"].as_str().unwrap().to_string();
        assert!(ids::valid_id(&id));

        let request = Request::builder()
            .uri(format!("/api/articles/{id}"))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let got: Article = serde_json::from_slice(&body).unwrap();
        assert_eq!(got, article);
        assert_eq!(got.summary.as_deref(), Some("Summary of text."));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let app = create_app(state()).await;

        let request = Request::builder()
            .uri(format!("/api/articles/{}", ids::unique_id()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_bad_request() {
        let app = create_app(state()).await;

        let request = Request::builder()
            .uri("/api/articles/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
