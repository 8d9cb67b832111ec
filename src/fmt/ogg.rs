// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    ogg::VorbisComments,
    picture::{Picture, PictureType},
};

use crate::{
    MetadataRecord, Result,
    util::artwork::{self, MAX_COVER_DIMENSION, OGG_COVER_MAX_DATA_SIZE},
};

/// Assembles `record` into the Vorbis comments of an Ogg-family stream
/// (Opus, Speex, or Vorbis).
///
/// Unlike FLAC the picture ends up base64-wrapped inside a
/// `METADATA_BLOCK_PICTURE` comment on write, so the artwork is shrunk to
/// fit the size limits before embedding.
pub(crate) fn assemble(comments: &mut VorbisComments, record: &MetadataRecord) -> Result<()> {
    super::vorbis::write_comment_fields(comments, record);

    if let Some(image_data) = &record.artwork_data {
        let image_data =
            artwork::normalize(image_data, MAX_COVER_DIMENSION, OGG_COVER_MAX_DATA_SIZE)?;
        let mime_type = artwork::sniff_mime_type(&image_data)?;
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime_type),
            record.artwork_url.clone(),
            image_data,
        );
        super::flac::replace_pictures(comments, picture)?;
    }
    Ok(())
}
