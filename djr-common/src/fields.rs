//! Destination form field mapping
//!
//! Single source of truth shared by the submission client (which writes
//! values under these identifiers) and the document entry side (which maps
//! the form's submit event back by question title). Changing the structure
//! of the destination form requires updating only this table.

/// Logical fields of the song request form.
///
/// Every logical field has exactly one destination identifier; the enum plus
/// exhaustive match arms make a missing or duplicated mapping unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    TrackId,
    TrackName,
    ArtistName,
    AlbumName,
    ArtworkUrl,
    PreviewUrl,
    RequesterName,
    Dedication,
    Contact,
}

impl FormField {
    /// All mapped fields, in the order they appear on the destination form.
    pub const ALL: [FormField; 9] = [
        FormField::TrackId,
        FormField::TrackName,
        FormField::ArtistName,
        FormField::AlbumName,
        FormField::ArtworkUrl,
        FormField::PreviewUrl,
        FormField::RequesterName,
        FormField::Dedication,
        FormField::Contact,
    ];

    /// Opaque identifier of the destination form input, as assigned by the
    /// form owner. These are Google Form `entry.N` tokens, not meaningful
    /// values.
    pub fn entry_id(self) -> &'static str {
        match self {
            FormField::TrackId => "entry.1930374469",
            FormField::TrackName => "entry.848586508",
            FormField::ArtistName => "entry.1340168059",
            FormField::AlbumName => "entry.751306465",
            FormField::ArtworkUrl => "entry.526849186",
            FormField::PreviewUrl => "entry.1892195556",
            FormField::RequesterName => "entry.905310058",
            FormField::Dedication => "entry.110263767",
            FormField::Contact => "entry.1637964334",
        }
    }

    /// Question title as delivered by the destination form's own submit
    /// event (`namedValues` keys). Used to map event payloads back to a
    /// submission record.
    pub fn label(self) -> &'static str {
        match self {
            FormField::TrackId => "Track ID",
            FormField::TrackName => "Track Name",
            FormField::ArtistName => "Artist Name",
            FormField::AlbumName => "Album Name",
            FormField::ArtworkUrl => "Artwork URL",
            FormField::PreviewUrl => "Preview URL",
            FormField::RequesterName => "Requester Name",
            FormField::Dedication => "Dedication",
            FormField::Contact => "Contact",
        }
    }
}
