//! Normalized request relay models

use serde::{Deserialize, Serialize};

/// Normalized catalog search result.
///
/// Created by the catalog search client from upstream records and consumed
/// by the presentation side and, when a request is made, by the form
/// submission client. Lives only for the duration of one search response.
///
/// Absent optional fields serialize as JSON `null`, never as omitted keys:
/// the wire contract distinguishes "no album" from "field not present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Stable catalog identifier, opaque downstream (upstream delivers it
    /// numeric; it is stringified on the way in and never parsed again)
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub artwork_url: Option<String>,
    pub preview_url: Option<String>,
}

/// Optional human-supplied context attached to a song request.
/// Not validated beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequesterDetails {
    pub name: Option<String>,
    pub dedication: Option<String>,
    pub contact: Option<String>,
}
