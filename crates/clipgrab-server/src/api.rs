use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clipgrab_core::{
    ClipgrabError, ExtractionResult, ImageRelay, ImageToImageRequest, PageMetadata,
    TextToImageRequest, VideoExtractor,
};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    extractor: Arc<VideoExtractor>,
    relay: Arc<ImageRelay>,
}

impl AppState {
    pub fn new(extractor: VideoExtractor, relay: ImageRelay) -> Self {
        Self {
            extractor: Arc::new(extractor),
            relay: Arc::new(relay),
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let extractor = config.build_extractor()?;
        let relay = ImageRelay::with_config(config.relay_config())?;
        tracing::info!(strategy = extractor.strategy_name(), "extractor ready");
        Ok(Self::new(extractor, relay))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api", get(extract))
        .route("/api/text-to-image", post(text_to_image))
        .route("/api/image-to-image", post(image_to_image))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn extract(
    State(state): State<AppState>,
    query: Result<Query<ExtractQuery>, QueryRejection>,
) -> Result<Json<VideoInfo>, ApiError> {
    let Query(query) = query?;
    tracing::info!(url = %query.url, "extract request");

    let result = state
        .extractor
        .extract(&query.url)
        .await
        .map_err(ApiError::Extraction)?;

    match result {
        ExtractionResult::Success {
            metadata,
            primary_url,
            request_url,
        } => Ok(Json(VideoInfo {
            metadata,
            media_url: primary_url,
            url: request_url,
        })),
        ExtractionResult::Failure { reason } => Err(ApiError::MediaNotFound(reason)),
    }
}

async fn text_to_image(
    State(state): State<AppState>,
    request: Result<Json<TextToImageRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = request?;
    let json = state
        .relay
        .text_to_image(&request)
        .await
        .map_err(ApiError::Relay)?;
    Ok(Json(json))
}

async fn image_to_image(
    State(state): State<AppState>,
    request: Result<Json<ImageToImageRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = request?;
    let json = state
        .relay
        .image_to_image(&request)
        .await
        .map_err(ApiError::Relay)?;
    Ok(Json(json))
}

#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    #[serde(flatten)]
    pub metadata: PageMetadata,
    pub media_url: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MediaNotFound(String),
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error(transparent)]
    Extraction(ClipgrabError),
    #[error(transparent)]
    Relay(ClipgrabError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MediaNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Extraction(ClipgrabError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(ClipgrabError::ParseError(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Extraction(e) if e.is_fetch_error() => StatusCode::BAD_GATEWAY,
            ApiError::Relay(ClipgrabError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Extraction(_) | ApiError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Relay(e @ ClipgrabError::Upstream { .. }) => e.to_string(),
            ApiError::Relay(e) => format!("An internal error occurred: {}", e),
            other => other.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
