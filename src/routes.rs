//! The request boundary: one route, `GET /api/match/{id}`, returning
//! the normalized match record as JSON. Every fault maps to a status
//! code and an `{"error": ...}` body here; nothing propagates uncaught.

use std::sync::{Arc, LazyLock};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use log::{debug, error};
use regex::Regex;
use serde_json::{Value, json};
use vlr_api::cache::RecordCache;
use vlr_api::client::{ApiError, VlrApi};

static MATCH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").unwrap_or_else(|_| unreachable!()));

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<VlrApi>,
    pub cache: Arc<RecordCache>,
}

/// Request-level error taxonomy. Mapped from `vlr_api::client::ApiError`
/// plus the boundary's own id validation.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestError {
    InvalidId,
    /// Upstream fetch failed; carries the upstream status when there
    /// was one (passed through), otherwise a transport fault (500).
    Fetch(Option<u16>),
    Incomplete,
    NoPlayerData,
    Processing,
}

impl RequestError {
    fn status(&self) -> StatusCode {
        match self {
            RequestError::InvalidId => StatusCode::BAD_REQUEST,
            RequestError::Fetch(Some(code)) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RequestError::Fetch(None) => StatusCode::INTERNAL_SERVER_ERROR,
            RequestError::Incomplete => StatusCode::NOT_FOUND,
            RequestError::NoPlayerData => StatusCode::NOT_FOUND,
            RequestError::Processing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            RequestError::InvalidId => "Invalid match ID format",
            RequestError::Fetch(_) => "Failed to fetch match data from source",
            RequestError::Incomplete => "Match data not found or incomplete",
            RequestError::NoPlayerData => "No player data found",
            RequestError::Processing => "Failed to process match data",
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<ApiError> for RequestError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(_) => RequestError::Fetch(None),
            ApiError::Status(code) => RequestError::Fetch(Some(code)),
            ApiError::Incomplete => RequestError::Incomplete,
            ApiError::NoPlayerData => RequestError::NoPlayerData,
            ApiError::Extract(_) | ApiError::Serialize(_) => RequestError::Processing,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/match/{id}", get(get_match))
        .with_state(state)
}

/// Read-through cache in front of the live extraction pipeline. The id
/// is validated before any collaborator is touched.
async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, RequestError> {
    if !MATCH_ID.is_match(&id) {
        return Err(RequestError::InvalidId);
    }
    let id: u32 = id.parse().map_err(|_| RequestError::InvalidId)?;

    if let Some(record) = state.cache.get(id) {
        debug!("match {id}: served from cache");
        return Ok(Json(record));
    }

    let record = state.api.fetch_match(id).await.map_err(|e| {
        error!("match {id}: {e}");
        RequestError::from(e)
    })?;

    if let Err(e) = state.cache.put(id, &record) {
        // The response is still served; the next request fetches again.
        error!("match {id}: cache write failed: {e}");
    }

    Ok(Json(record))
}
