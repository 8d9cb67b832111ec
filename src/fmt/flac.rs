// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{
    ogg::{OggPictureStorage as _, VorbisComments},
    picture::{Picture, PictureType},
};

use crate::{MetadataRecord, Result, util::artwork};

/// Assembles `record` into the Vorbis comments of a FLAC file.
///
/// The artwork is embedded unmodified as a front cover picture block,
/// replacing all pre-existing pictures. FLAC picture blocks carry the raw
/// bytes, so no size normalization applies.
pub(crate) fn assemble(comments: &mut VorbisComments, record: &MetadataRecord) -> Result<()> {
    super::vorbis::write_comment_fields(comments, record);

    if let Some(image_data) = &record.artwork_data {
        let mime_type = artwork::sniff_mime_type(image_data)?;
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime_type),
            record.artwork_url.clone(),
            image_data.clone(),
        );
        replace_pictures(comments, picture)?;
    }
    Ok(())
}

/// Replaces all embedded pictures with a single front cover.
pub(super) fn replace_pictures(comments: &mut VorbisComments, picture: Picture) -> Result<()> {
    while !comments.pictures().is_empty() {
        comments.remove_picture(comments.pictures().len() - 1);
    }
    // Recomputes the picture information from the actual image data.
    comments.insert_picture(picture, None)?;
    Ok(())
}
