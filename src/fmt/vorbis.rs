// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::ogg::VorbisComments;

use crate::MetadataRecord;

// Verbatim comment keys, shared by the FLAC and Ogg-family schemes.
// Vorbis comment keys are case-insensitive on read, but the mixed casing
// is preserved on write for compatibility with files tagged by earlier
// releases.
const KEY_ARTIST: &str = "Artist";
const KEY_TITLE: &str = "Title";
const KEY_DATE: &str = "Date";
const KEY_LINK: &str = "WWWArtist";
const KEY_GENRE: &str = "Genre";
const KEY_TAGS: &str = "Tags";
const KEY_ALBUM_TITLE: &str = "Album";
const KEY_ALBUM_AUTHOR: &str = "Albumartist";
const KEY_TRACK_NUMBER: &str = "Tracknumber";
const KEY_DESCRIPTION: &str = "Description";
const KEY_ARTWORK_URL: &str = "Artwork";
const KEY_DISPLAY_DATE: &str = "ReleaseTime";
const KEY_UID: &str = "UID";
const KEY_TRACK_ID: &str = "ID";
const KEY_USER_ID: &str = "ID User";
const KEY_RELEASE_TYPE: &str = "RELEASETYPE";
const KEY_ALBUM_DISPLAY_DATE: &str = "Album Display Date";
const KEY_ALBUM_PUBLISH_DATE: &str = "Album Publish Date";
const KEY_ALBUM_CREATED_DATE: &str = "Album Creation Date";
const KEY_ALBUM_RELEASE_DATE: &str = "Album Release Date";
const KEY_ALBUM_LINK: &str = "WWWAlbum";

/// Writes all text fields of `record` as Vorbis comments.
///
/// Inserting replaces all comments with the same key, so re-assembling
/// never accumulates duplicates.
pub(super) fn write_comment_fields(comments: &mut VorbisComments, record: &MetadataRecord) {
    comments.insert(KEY_ARTIST.to_owned(), record.artist.clone());
    comments.insert(KEY_TITLE.to_owned(), record.title.clone());
    insert_or_remove(comments, KEY_DATE, record.created_date.as_deref());
    insert_or_remove(comments, KEY_LINK, record.link.as_deref());
    insert_or_remove(comments, KEY_GENRE, record.genre.as_deref());
    insert_or_remove(comments, KEY_TAGS, record.tags.as_deref());
    insert_or_remove(comments, KEY_ALBUM_TITLE, record.album_title.as_deref());
    insert_or_remove(comments, KEY_ALBUM_AUTHOR, record.album_author.as_deref());
    insert_or_remove(
        comments,
        KEY_TRACK_NUMBER,
        record
            .album_track_number
            .map(|track_number| track_number.to_string())
            .as_deref(),
    );
    insert_or_remove(comments, KEY_DESCRIPTION, record.description.as_deref());
    insert_or_remove(comments, KEY_ARTWORK_URL, record.artwork_url.as_deref());
    insert_or_remove(comments, KEY_DISPLAY_DATE, record.display_date.as_deref());
    insert_or_remove(comments, KEY_UID, record.uid.as_deref());
    insert_or_remove(
        comments,
        KEY_TRACK_ID,
        record.track_id.map(|id| id.to_string()).as_deref(),
    );
    insert_or_remove(
        comments,
        KEY_USER_ID,
        record.user_id.map(|id| id.to_string()).as_deref(),
    );
    insert_or_remove(comments, KEY_RELEASE_TYPE, record.album_type.as_deref());
    insert_or_remove(
        comments,
        KEY_ALBUM_DISPLAY_DATE,
        record.album_display_date.as_deref(),
    );
    insert_or_remove(
        comments,
        KEY_ALBUM_PUBLISH_DATE,
        record.album_publish_date.as_deref(),
    );
    insert_or_remove(
        comments,
        KEY_ALBUM_CREATED_DATE,
        record.album_created_date.as_deref(),
    );
    insert_or_remove(
        comments,
        KEY_ALBUM_RELEASE_DATE,
        record.album_release_date.as_deref(),
    );
    insert_or_remove(comments, KEY_ALBUM_LINK, record.album_link.as_deref());
}

fn insert_or_remove(comments: &mut VorbisComments, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        comments.insert(key.to_owned(), value.to_owned());
    } else {
        comments.remove(key).for_each(drop);
    }
}
