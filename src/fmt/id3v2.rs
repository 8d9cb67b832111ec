// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    TextEncoding,
    id3::v2::{CommentFrame, Frame, FrameFlags, FrameValue, Id3v2Tag},
    picture::{Picture, PictureType},
    tag::{ItemKey, MergeTag as _, SplitTag as _},
};

use crate::{MetadataRecord, Result, util::artwork};

const COMMENT_FRAME_ID: &str = "COMM";
const COMMENT_LANGUAGE: [u8; 3] = *b"eng";

/// Assembles `record` into an ID3v2 tag as carried by MP3, AIFF, and WAVE
/// files.
///
/// The typed tag is split into its generic representation, rewritten, and
/// merged back so that frames without a generic counterpart survive
/// untouched. Fields without a native generic mapping are written onto the
/// typed tag afterwards: one `TXXX` frame per free-form description and a
/// single English `COMM` frame for the description text.
pub(crate) fn assemble(tag: &mut Id3v2Tag, record: &MetadataRecord) -> Result<()> {
    let (remainder, mut exported) = std::mem::take(tag).split_tag();

    super::export_record(&mut exported, record);
    super::insert_or_remove(&mut exported, ItemKey::TrackArtistUrl, record.link.as_deref());
    super::insert_or_remove(&mut exported, ItemKey::ReleaseDate, record.display_date.as_deref());
    // Cleared here and rewritten as a typed frame below, to control the
    // frame's language.
    exported.remove_key(&ItemKey::Comment);

    if let Some(image_data) = &record.artwork_data {
        let mime_type = artwork::sniff_mime_type(image_data)?;
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime_type),
            record.artwork_url.clone(),
            image_data.clone(),
        );
        super::replace_pictures(&mut exported, picture);
    }

    *tag = remainder.merge_tag(exported);

    // Post-processing on the typed tag
    if let Some(description) = &record.description {
        let comment = CommentFrame {
            encoding: TextEncoding::UTF8,
            language: COMMENT_LANGUAGE,
            description: String::new(),
            content: description.clone(),
        };
        tag.insert(Frame::new(
            COMMENT_FRAME_ID,
            FrameValue::Comment(comment),
            FrameFlags::default(),
        )?);
    }
    for (description, value) in super::freeform_fields(record) {
        if let Some(value) = value {
            tag.insert_user_text(description.to_owned(), value);
        } else {
            tag.remove_user_text(description);
        }
    }

    Ok(())
}
