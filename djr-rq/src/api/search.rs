//! Catalog search endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use djr_common::model::Track;
use djr_common::Error;

use crate::AppState;

/// Query parameters for catalog search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text search term (required, trimmed)
    #[serde(default)]
    pub term: String,
}

/// Search response: normalized tracks plus an informational message when the
/// result set is empty (empty is a valid, non-exceptional outcome)
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub tracks: Vec<Track>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/search?term=...
///
/// Search the song catalog. A blank term is rejected before any outbound
/// call; upstream failures are classified by the client and mapped to
/// 502/503 here.
pub async fn search_songs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, SearchError> {
    let term = query.term.trim();
    if term.is_empty() {
        return Err(SearchError::MissingTerm);
    }

    let tracks = state.itunes.search(term).await.map_err(SearchError::Relay)?;

    let message = if tracks.is_empty() {
        Some(format!("No songs found for \"{}\".", term))
    } else {
        None
    };

    Ok(Json(SearchResponse { tracks, message }))
}

/// Search endpoint errors
#[derive(Debug)]
pub enum SearchError {
    MissingTerm,
    Relay(Error),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SearchError::MissingTerm => {
                (StatusCode::BAD_REQUEST, "Missing search term".to_string())
            }
            SearchError::Relay(err) => {
                // Rate limiting is the upstream's condition, not the
                // caller's fault: 503 tells the caller to retry later,
                // everything else is a bad gateway.
                let status = match err {
                    Error::RateLimited(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, err.message())
            }
        };

        let body = Json(json!({
            "tracks": [],
            "error": message,
        }));

        (status, body).into_response()
    }
}
