//! Google Form submission client
//!
//! The operator configures a single human-facing "prefill" URL; the client
//! treats it as a template from which both the real submission endpoint and
//! a safe baseline parameter set are derived. Keeping one URL avoids two
//! hand-maintained pieces of configuration drifting apart.

use std::time::Duration;

use reqwest::Url;

use djr_common::fields::FormField;
use djr_common::model::{RequesterDetails, Track};
use djr_common::{Error, Result};

const USER_AGENT: &str = "djr/0.1.0 (https://github.com/djr/djr)";

/// Path segment Google Forms uses for the submission endpoint.
const RESPONSE_SEGMENT: &str = "formResponse";

/// Literal submit marker required by the form.
const SUBMIT_KEY: &str = "submit";
const SUBMIT_VALUE: &str = "Submit";

/// Fixed confirmation returned to the caller on success.
pub const CONFIRMATION_MESSAGE: &str = "Song request submitted successfully.";

/// Derived submission target: the real endpoint plus baseline parameters
/// carried over from the prefill URL's query string.
#[derive(Debug, Clone, PartialEq)]
pub struct FormTarget {
    pub response_url: String,
    pub default_params: Vec<(String, String)>,
}

impl FormTarget {
    /// Derive the submission target from a prefill URL.
    ///
    /// The path's first `viewform` or `prefill` segment is rewritten to
    /// `formResponse`, preserving the rest of the path. The query string
    /// becomes the baseline parameter set, minus any key equal to one of
    /// the mapped field identifiers or the submit marker: unrelated
    /// defaults the form owner configured survive, stale values for fields
    /// this client is about to set do not.
    pub fn from_prefill_url(prefill_url: &str) -> Result<Self> {
        let mut parsed = Url::parse(prefill_url).map_err(|_| {
            Error::Config("Google Form URL is invalid. Provide a full prefilled link.".to_string())
        })?;

        let default_params: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(key, _)| {
                key != SUBMIT_KEY && FormField::ALL.iter().all(|f| f.entry_id() != key)
            })
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut replaced = false;
        let segments: Vec<String> = parsed
            .path()
            .split('/')
            .map(|segment| {
                if !replaced && (segment == "viewform" || segment == "prefill") {
                    replaced = true;
                    RESPONSE_SEGMENT.to_string()
                } else {
                    segment.to_string()
                }
            })
            .collect();

        parsed.set_path(&segments.join("/"));
        parsed.set_query(None);
        parsed.set_fragment(None);

        Ok(Self {
            response_url: parsed.to_string(),
            default_params,
        })
    }
}

/// Destination form client
#[derive(Debug, Clone)]
pub struct FormClient {
    http_client: reqwest::Client,
    prefill_url: Option<String>,
}

impl FormClient {
    /// Create a client for the configured prefill URL. `None` is accepted
    /// so the service can start without configuration; every submit then
    /// reports the missing URL as a configuration error.
    pub fn new(prefill_url: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            prefill_url,
        })
    }

    /// Submit one song request to the destination form.
    ///
    /// Single best-effort POST of URL-encoded form data, no retry. The
    /// target is re-derived per call so a corrected environment takes
    /// effect without restart-time state.
    pub async fn submit(&self, song: &Track, requester: &RequesterDetails) -> Result<()> {
        let target = self.target()?;
        let params = build_params(&target, song, requester);

        tracing::debug!(track_id = %song.id, "Submitting song request to Google Form");

        let response = self
            .http_client
            .post(&target.response_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to submit to Google Form: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: format!("Google Form responded with status {}", status.as_u16()),
            });
        }

        tracing::info!(track_id = %song.id, title = %song.title, "Song request submitted");

        Ok(())
    }

    fn target(&self) -> Result<FormTarget> {
        let prefill_url = self.prefill_url.as_deref().ok_or_else(|| {
            Error::Config(
                "Google Form URL is not configured. Set GOOGLE_FORM_URL or VITE_GOOGLE_FORM_URL."
                    .to_string(),
            )
        })?;

        FormTarget::from_prefill_url(prefill_url)
    }
}

/// Assemble the full parameter set for one submission: baseline defaults,
/// all nine mapped fields, then the submit marker. Absent optional inputs
/// are written as empty strings, not omitted; the destination form treats a
/// missing key as "unanswered", which is not the same thing.
fn build_params(
    target: &FormTarget,
    song: &Track,
    requester: &RequesterDetails,
) -> Vec<(String, String)> {
    let mut params = target.default_params.clone();

    // The baseline was stripped of mapped keys, so plain appends never
    // produce duplicates.
    append_field(&mut params, FormField::TrackId, Some(&song.id));
    append_field(&mut params, FormField::TrackName, Some(&song.title));
    append_field(&mut params, FormField::ArtistName, Some(&song.artist));
    append_field(&mut params, FormField::AlbumName, song.album.as_deref());
    append_field(&mut params, FormField::ArtworkUrl, song.artwork_url.as_deref());
    append_field(&mut params, FormField::PreviewUrl, song.preview_url.as_deref());
    append_field(&mut params, FormField::RequesterName, requester.name.as_deref());
    append_field(&mut params, FormField::Dedication, requester.dedication.as_deref());
    append_field(&mut params, FormField::Contact, requester.contact.as_deref());

    params.push((SUBMIT_KEY.to_string(), SUBMIT_VALUE.to_string()));

    params
}

fn append_field(params: &mut Vec<(String, String)>, field: FormField, value: Option<&str>) {
    params.push((
        field.entry_id().to_string(),
        value.unwrap_or_default().to_string(),
    ));
}
