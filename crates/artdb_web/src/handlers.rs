use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use artdb_core::{Article, ArticleStorage, Error};

use crate::AppState;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidId => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Serialize)]
pub struct AddResponse {
    pub id: String,
}

pub async fn add_article(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> Result<Json<AddResponse>, ApiError> {
    let id = state.ingestor.add(article).await?;
    Ok(Json(AddResponse { id }))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = state.storage.get(&id).await?;
    Ok(Json(article))
}
