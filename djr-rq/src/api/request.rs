//! Song request submission endpoint

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use djr_common::model::{RequesterDetails, Track};
use djr_common::Error;

use crate::services::form_client::CONFIRMATION_MESSAGE;
use crate::AppState;

/// Submit request body
#[derive(Debug, Deserialize)]
struct RequestBody {
    song: Option<SongPayload>,
    #[serde(default)]
    requester: RequesterDetails,
}

/// Song as supplied by the caller. Identity fields default to empty so that
/// a missing key and a blank value fail validation the same way, with the
/// validation message rather than a JSON parse error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongPayload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    album: Option<String>,
    artwork_url: Option<String>,
    preview_url: Option<String>,
}

impl SongPayload {
    /// Validate the minimal track identity (id, title, artist) and convert
    /// into the normalized model. `None` means the request must be rejected
    /// before any network attempt.
    fn into_track(self) -> Option<Track> {
        if self.id.trim().is_empty()
            || self.title.trim().is_empty()
            || self.artist.trim().is_empty()
        {
            return None;
        }

        Some(Track {
            id: self.id,
            title: self.title,
            artist: self.artist,
            album: self.album,
            artwork_url: self.artwork_url,
            preview_url: self.preview_url,
        })
    }
}

/// Confirmation response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/request
///
/// Relay one song request to the destination form. The body is read raw so
/// that "missing body" and "invalid JSON" produce their own 400 messages
/// instead of the framework's extractor rejection.
pub async fn submit_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, RequestError> {
    if body.is_empty() {
        return Err(RequestError::MissingBody);
    }

    let payload: RequestBody =
        serde_json::from_slice(&body).map_err(|_| RequestError::InvalidJson)?;

    let song = payload
        .song
        .and_then(SongPayload::into_track)
        .ok_or(RequestError::MissingSong)?;

    state
        .form
        .submit(&song, &payload.requester)
        .await
        .map_err(RequestError::Relay)?;

    Ok(Json(MessageResponse {
        message: CONFIRMATION_MESSAGE.to_string(),
    }))
}

/// OPTIONS /api/request
///
/// CORS preflight; the router's header layers attach the actual
/// cross-origin headers to this response like any other.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for unsupported methods on /api/request
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// Submit endpoint errors
#[derive(Debug)]
pub enum RequestError {
    MissingBody,
    InvalidJson,
    MissingSong,
    Relay(Error),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RequestError::MissingBody => {
                (StatusCode::BAD_REQUEST, "Missing request body".to_string())
            }
            RequestError::InvalidJson => {
                (StatusCode::BAD_REQUEST, "Invalid JSON payload".to_string())
            }
            RequestError::MissingSong => (
                StatusCode::BAD_REQUEST,
                "Song information is required".to_string(),
            ),
            RequestError::Relay(err) => {
                // Misconfiguration is an operator concern (500); anything
                // the destination did wrong is a bad gateway (502).
                let status = match err {
                    Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, err.message())
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
