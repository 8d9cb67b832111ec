// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Canonical, format-independent metadata for a single audio item.
///
/// Constructed once per item by the caller and consumed by exactly one
/// [`assemble`](crate::assemble) invocation. Only `artist` and `title` are
/// required; an absent optional field means "do not write this field", never
/// "write an empty value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub artist: String,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    /// Source URL of the artwork. Doubles as the embedded picture
    /// description where the tagging scheme supports one.
    pub artwork_url: Option<String>,
    /// Raw, already-fetched image bytes to embed as the front cover.
    pub artwork_data: Option<Vec<u8>>,
    /// Permalink of the track.
    pub link: Option<String>,
    /// Creation date, written as the date of every variant.
    pub created_date: Option<String>,
    pub display_date: Option<String>,
    pub album_title: Option<String>,
    pub album_author: Option<String>,
    pub album_track_number: Option<u32>,
    /// Joined free-text tag list.
    pub tags: Option<String>,
    pub uid: Option<String>,
    pub track_id: Option<u64>,
    pub user_id: Option<u64>,
    /// Carried for callers that batch per-album work. Not mapped to any
    /// tag field.
    pub album_track_count: Option<u32>,
    pub album_type: Option<String>,
    pub album_publish_date: Option<String>,
    pub album_display_date: Option<String>,
    pub album_created_date: Option<String>,
    pub album_release_date: Option<String>,
    pub album_link: Option<String>,
}

impl MetadataRecord {
    #[must_use]
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
