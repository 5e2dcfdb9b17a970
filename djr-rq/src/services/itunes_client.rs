//! iTunes Search API client

use std::time::Duration;

use serde::Deserialize;

use djr_common::model::Track;
use djr_common::{Error, Result};

const ITUNES_SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";
const USER_AGENT: &str = "djr/0.1.0 (https://github.com/djr/djr)";

/// Fixed result cap, bounding both payload size and render cost downstream.
const RESULT_LIMIT: &str = "25";

/// One record of the iTunes Search API response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItunesTrack {
    /// Numeric upstream identifier; stringified on the way out since it is
    /// an opaque token downstream, not an arithmetic value
    track_id: u64,
    track_name: String,
    artist_name: String,
    collection_name: Option<String>,
    artwork_url100: Option<String>,
    preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItunesSearchPayload {
    #[serde(default)]
    results: Vec<ItunesTrack>,
}

/// iTunes Search API client
#[derive(Debug, Clone)]
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(ITUNES_SEARCH_ENDPOINT)
    }

    /// Create a client against a non-default endpoint (used by tests to
    /// point at a local stub server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Search the catalog for songs matching `term`.
    ///
    /// The caller guarantees a trimmed, non-empty term. Zero results is a
    /// success, not an error. Upstream failures are classified three ways:
    /// rate limit (back off and retry later), upstream status failure, and
    /// transport failure (no connectivity).
    pub async fn search(&self, term: &str) -> Result<Vec<Track>> {
        let params = [
            ("term", term),
            ("entity", "song"),
            ("limit", RESULT_LIMIT),
        ];

        tracing::debug!(term = term, "Querying iTunes Search API");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to reach iTunes Search API: {}", e)))?;

        let status = response.status();

        if status.as_u16() == 429 {
            return Err(Error::RateLimited(
                "The iTunes Search API rate limit has been reached. Please retry shortly."
                    .to_string(),
            ));
        }

        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: format!("iTunes Search API returned status {}", status.as_u16()),
            });
        }

        let payload: ItunesSearchPayload = response.json().await.map_err(|e| Error::Upstream {
            status: status.as_u16(),
            message: format!("Failed to parse iTunes Search API response: {}", e),
        })?;

        tracing::debug!(results = payload.results.len(), "iTunes search successful");

        Ok(payload.results.into_iter().map(map_track).collect())
    }
}

/// Map one upstream record field-by-field into the normalized model.
/// Absent optional fields stay absent; they are never substituted with
/// empty strings here.
fn map_track(record: ItunesTrack) -> Track {
    Track {
        id: record.track_id.to_string(),
        title: record.track_name,
        artist: record.artist_name,
        album: record.collection_name,
        artwork_url: record.artwork_url100,
        preview_url: record.preview_url,
    }
}
