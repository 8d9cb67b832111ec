// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    picture::Picture,
    tag::{Accessor as _, ItemKey, Tag},
};

use crate::{MetadataRecord, Result, TagContainer};

pub(crate) mod flac;
pub(crate) mod id3v2;
pub(crate) mod mp4;
pub(crate) mod ogg;
pub(crate) mod vorbis;


/// Free-form field descriptions shared by the ID3 (`TXXX:<desc>`) and MP4
/// (`----:com.apple.iTunes:<desc>`) schemes.
const FREEFORM_ARTWORK_URL: &str = "Artwork";
const FREEFORM_TAGS: &str = "Tags";
const FREEFORM_UID: &str = "UID";
const FREEFORM_TRACK_ID: &str = "ID";
const FREEFORM_USER_ID: &str = "ID User";
const FREEFORM_RELEASE_TYPE: &str = "ReleaseType";
const FREEFORM_ALBUM_DISPLAY_DATE: &str = "Album Display Date";
const FREEFORM_ALBUM_PUBLISH_DATE: &str = "Album Publish Date";
const FREEFORM_ALBUM_CREATED_DATE: &str = "Album Creation Date";
const FREEFORM_ALBUM_RELEASE_DATE: &str = "Album Release Date";
const FREEFORM_ALBUM_LINK: &str = "WWWAlbum";
// Only the MP4 scheme stores these two as free-form atoms. ID3 has
// dedicated WOAR and TDRL frames for them.
const FREEFORM_LINK: &str = "WWWArtist";
const FREEFORM_DISPLAY_DATE: &str = "ReleaseTime";

/// Writes all fields of `record` into `container`, overwriting previously
/// assembled fields and removing those that are absent from `record`.
///
/// Unrelated pre-existing tag content is preserved, with one exception:
/// embedding artwork replaces all pre-existing embedded pictures.
///
/// # Errors
///
/// Fails when the artwork bytes cannot be decoded, when Ogg artwork cannot
/// be shrunk (see [`normalize`](crate::normalize)), or when the underlying
/// tag representation rejects the picture.
pub fn assemble(container: &mut TagContainer, record: &MetadataRecord) -> Result<()> {
    match container {
        TagContainer::Flac(comments) => flac::assemble(comments, record),
        TagContainer::Ogg(comments) => ogg::assemble(comments, record),
        TagContainer::Id3(tag) => id3v2::assemble(tag, record),
        TagContainer::Mp4(ilst) => mp4::assemble(ilst, record),
    }
}

/// Exports the fields with a dedicated frame/atom in both the ID3 and MP4
/// schemes into a generic tag representation.
///
/// Used by the ID3 and MP4 handlers, which split their typed tag into a
/// generic [`Tag`], rewrite it, and merge it back. Free-form fields and the
/// scheme-specific link/date fields are written onto the typed tag by the
/// handlers afterwards, since lofty's checked generic insert rejects keys
/// without a native mapping. The Vorbis-comment handlers bypass all of this
/// to control the verbatim comment keys.
fn export_record(tag: &mut Tag, record: &MetadataRecord) {
    tag.insert_text(ItemKey::TrackArtist, record.artist.clone());
    tag.set_title(record.title.clone());
    insert_or_remove(tag, ItemKey::RecordingDate, record.created_date.as_deref());
    insert_or_remove(tag, ItemKey::Genre, record.genre.as_deref());
    insert_or_remove(tag, ItemKey::AlbumTitle, record.album_title.as_deref());
    insert_or_remove(tag, ItemKey::AlbumArtist, record.album_author.as_deref());
    if let Some(track_number) = record.album_track_number {
        tag.set_track(track_number);
    } else {
        tag.remove_track();
    }
}

/// The free-form fields common to the ID3 and MP4 schemes, paired with
/// their rendered values.
fn freeform_fields(record: &MetadataRecord) -> [(&'static str, Option<String>); 11] {
    [
        (FREEFORM_ARTWORK_URL, record.artwork_url.clone()),
        (FREEFORM_TAGS, record.tags.clone()),
        (FREEFORM_UID, record.uid.clone()),
        (FREEFORM_TRACK_ID, record.track_id.map(|id| id.to_string())),
        (FREEFORM_USER_ID, record.user_id.map(|id| id.to_string())),
        (FREEFORM_RELEASE_TYPE, record.album_type.clone()),
        (
            FREEFORM_ALBUM_DISPLAY_DATE,
            record.album_display_date.clone(),
        ),
        (
            FREEFORM_ALBUM_PUBLISH_DATE,
            record.album_publish_date.clone(),
        ),
        (
            FREEFORM_ALBUM_CREATED_DATE,
            record.album_created_date.clone(),
        ),
        (
            FREEFORM_ALBUM_RELEASE_DATE,
            record.album_release_date.clone(),
        ),
        (FREEFORM_ALBUM_LINK, record.album_link.clone()),
    ]
}

fn insert_or_remove(tag: &mut Tag, item_key: ItemKey, value: Option<&str>) {
    if let Some(value) = value {
        tag.insert_text(item_key, value.to_owned());
    } else {
        tag.remove_key(&item_key);
    }
}

/// Replaces all embedded pictures with a single front cover.
fn replace_pictures(tag: &mut Tag, picture: Picture) {
    while !tag.pictures().is_empty() {
        tag.remove_picture(tag.pictures().len() - 1);
    }
    tag.push_picture(picture);
}
