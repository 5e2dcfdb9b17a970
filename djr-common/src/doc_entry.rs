//! Playlist document entry formatting
//!
//! The destination form's own submit trigger (outside this system's request
//! path) delivers named field values; the caller maps those back into a
//! [`SongRequestSubmission`] and formats it into a heading/metadata block
//! for appending to the playlist document. Pure functions, no I/O.

use std::collections::HashMap;

use chrono::DateTime;

use crate::fields::FormField;

/// Placeholder for absent content fields (album, dedication, contact).
pub const ABSENT_PLACEHOLDER: &str = "—";

/// Placeholder for an absent requester name.
pub const GUEST_PLACEHOLDER: &str = "Guest";

/// Rendering of the `Requested at` timestamp: day, abbreviated month, year,
/// 24-hour time (en-GB medium date + short time).
const TIMESTAMP_FORMAT: &str = "%-d %b %Y, %H:%M";

/// One song request as recorded by the destination form.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRequestSubmission {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: Option<String>,
    pub requester_name: Option<String>,
    pub dedication: Option<String>,
    pub contact: Option<String>,
    /// RFC 3339 timestamp of the submission, stamped by the trigger's caller
    pub submitted_at: String,
}

impl SongRequestSubmission {
    /// Map the named values delivered by the form's submit event back into a
    /// submission record, keyed by question title (see [`FormField::label`]).
    /// `submitted_at` is stamped by the caller since the event carries no
    /// usable timestamp.
    pub fn from_named_values(
        named_values: &HashMap<String, Vec<String>>,
        submitted_at: String,
    ) -> Self {
        let first = |field: FormField| {
            named_values
                .get(field.label())
                .and_then(|values| values.first())
                .cloned()
        };

        Self {
            track_id: first(FormField::TrackId).unwrap_or_default(),
            track_name: first(FormField::TrackName).unwrap_or_else(|| "Unknown Track".to_string()),
            artist_name: first(FormField::ArtistName)
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            album_name: first(FormField::AlbumName),
            requester_name: first(FormField::RequesterName),
            dedication: first(FormField::Dedication),
            contact: first(FormField::Contact),
            submitted_at,
        }
    }
}

/// One label/value pair of a document entry's metadata block.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataField {
    pub label: String,
    pub value: String,
}

/// Formatted playlist document entry: heading plus ordered metadata.
/// Pure derived value with no identity or lifecycle of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry {
    pub heading: String,
    pub metadata: Vec<MetadataField>,
}

/// Format a submission into a document entry.
///
/// The metadata order is fixed: Artist, Album, Requested by, Dedication,
/// Contact, Requested at. An unparseable timestamp passes through raw rather
/// than erroring: a malformed value in the document beats a hidden one.
pub fn build_doc_entry(submission: &SongRequestSubmission) -> DocEntry {
    let requested_at = DateTime::parse_from_rfc3339(&submission.submitted_at)
        .map(|instant| instant.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|_| submission.submitted_at.clone());

    let field = |label: &str, value: String| MetadataField {
        label: label.to_string(),
        value,
    };

    let placeholder =
        |value: &Option<String>| value.clone().unwrap_or_else(|| ABSENT_PLACEHOLDER.to_string());

    DocEntry {
        heading: format!("{} (ID: {})", submission.track_name, submission.track_id),
        metadata: vec![
            field("Artist", submission.artist_name.clone()),
            field("Album", placeholder(&submission.album_name)),
            field(
                "Requested by",
                submission
                    .requester_name
                    .clone()
                    .unwrap_or_else(|| GUEST_PLACEHOLDER.to_string()),
            ),
            field("Dedication", placeholder(&submission.dedication)),
            field("Contact", placeholder(&submission.contact)),
            field("Requested at", requested_at),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> SongRequestSubmission {
        SongRequestSubmission {
            track_id: "321".to_string(),
            track_name: "Digital Love".to_string(),
            artist_name: "Daft Punk".to_string(),
            album_name: Some("Discovery".to_string()),
            requester_name: Some("Alex".to_string()),
            dedication: Some("For the dance floor".to_string()),
            contact: Some("alex@example.com".to_string()),
            submitted_at: "2026-08-31T14:30:00Z".to_string(),
        }
    }

    #[test]
    fn heading_combines_title_and_id() {
        let entry = build_doc_entry(&full_submission());
        assert_eq!(entry.heading, "Digital Love (ID: 321)");
    }

    #[test]
    fn metadata_order_is_fixed() {
        let entry = build_doc_entry(&full_submission());
        let labels: Vec<&str> = entry.metadata.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Artist",
                "Album",
                "Requested by",
                "Dedication",
                "Contact",
                "Requested at"
            ]
        );
    }

    #[test]
    fn full_metadata_passes_through() {
        let entry = build_doc_entry(&full_submission());
        assert_eq!(entry.metadata[0].value, "Daft Punk");
        assert_eq!(entry.metadata[1].value, "Discovery");
        assert_eq!(entry.metadata[2].value, "Alex");
        assert_eq!(entry.metadata[3].value, "For the dance floor");
        assert_eq!(entry.metadata[4].value, "alex@example.com");
    }

    #[test]
    fn absent_fields_fall_back_to_placeholders() {
        let submission = SongRequestSubmission {
            album_name: None,
            requester_name: None,
            dedication: None,
            contact: None,
            ..full_submission()
        };

        let entry = build_doc_entry(&submission);
        assert_eq!(entry.metadata[1].value, ABSENT_PLACEHOLDER);
        assert_eq!(entry.metadata[2].value, GUEST_PLACEHOLDER);
        assert_eq!(entry.metadata[3].value, ABSENT_PLACEHOLDER);
        assert_eq!(entry.metadata[4].value, ABSENT_PLACEHOLDER);
    }

    #[test]
    fn valid_timestamp_renders_human_readable() {
        let entry = build_doc_entry(&full_submission());
        assert_eq!(entry.metadata[5].value, "31 Aug 2026, 14:30");
    }

    #[test]
    fn unparseable_timestamp_passes_through_raw() {
        let submission = SongRequestSubmission {
            submitted_at: "not-a-timestamp".to_string(),
            ..full_submission()
        };

        let entry = build_doc_entry(&submission);
        assert_eq!(entry.metadata[5].value, "not-a-timestamp");
    }

    #[test]
    fn named_values_map_back_to_submission() {
        let mut named = HashMap::new();
        named.insert("Track ID".to_string(), vec!["321".to_string()]);
        named.insert("Track Name".to_string(), vec!["Digital Love".to_string()]);
        named.insert("Artist Name".to_string(), vec!["Daft Punk".to_string()]);
        named.insert("Album Name".to_string(), vec!["Discovery".to_string()]);

        let submission =
            SongRequestSubmission::from_named_values(&named, "2026-08-31T14:30:00Z".to_string());

        assert_eq!(submission.track_id, "321");
        assert_eq!(submission.track_name, "Digital Love");
        assert_eq!(submission.artist_name, "Daft Punk");
        assert_eq!(submission.album_name, Some("Discovery".to_string()));
        assert_eq!(submission.requester_name, None);
        assert_eq!(submission.dedication, None);
        assert_eq!(submission.contact, None);
    }

    #[test]
    fn missing_identity_values_get_defaults() {
        let submission =
            SongRequestSubmission::from_named_values(&HashMap::new(), "now".to_string());

        assert_eq!(submission.track_id, "");
        assert_eq!(submission.track_name, "Unknown Track");
        assert_eq!(submission.artist_name, "Unknown Artist");
    }
}
