// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::{file::FileType, id3::v2::Id3v2Tag, mp4::Ilst, ogg::VorbisComments};

use crate::{Error, Result};

/// In-memory tag section of an audio file, tagged with its tagging scheme.
///
/// The variant is fixed for the lifetime of the container. Dispatch in
/// [`assemble`](crate::assemble) matches exhaustively on it, so adding a
/// variant is a compile-time-checked change instead of a runtime fallback.
///
/// FLAC and the Ogg family share the Vorbis-comment representation but keep
/// separate variants: their cover-art embedding conventions differ (FLAC
/// pictures are unconstrained picture blocks, Ogg pictures are normalized and
/// base64-wrapped into a single comment on write).
#[derive(Debug)]
pub enum TagContainer {
    Flac(VorbisComments),
    /// Opus, Speex, and Vorbis streams in an Ogg container.
    Ogg(VorbisComments),
    /// ID3v2 as carried by MP3, AIFF, and WAVE files.
    Id3(Id3v2Tag),
    /// The `ilst` atom of MP4/M4A files.
    Mp4(Ilst),
}

impl TagContainer {
    /// Creates an empty container for an inspected file type.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedContainerVariant`] for file types
    /// outside the four supported tagging schemes.
    pub fn for_file_type(file_type: FileType) -> Result<Self> {
        match file_type {
            FileType::Flac => Ok(Self::Flac(VorbisComments::default())),
            FileType::Opus | FileType::Speex | FileType::Vorbis => {
                Ok(Self::Ogg(VorbisComments::default()))
            }
            FileType::Mpeg | FileType::Aiff | FileType::Wav => {
                Ok(Self::Id3(Id3v2Tag::default()))
            }
            FileType::Mp4 => Ok(Self::Mp4(Ilst::default())),
            unsupported => Err(Error::UnsupportedContainerVariant(unsupported)),
        }
    }

    /// The Vorbis comments of a FLAC or Ogg-family container.
    #[must_use]
    pub fn vorbis_comments(&self) -> Option<&VorbisComments> {
        match self {
            Self::Flac(comments) | Self::Ogg(comments) => Some(comments),
            Self::Id3(_) | Self::Mp4(_) => None,
        }
    }

    #[must_use]
    pub fn id3v2(&self) -> Option<&Id3v2Tag> {
        match self {
            Self::Id3(tag) => Some(tag),
            _ => None,
        }
    }

    #[must_use]
    pub fn ilst(&self) -> Option<&Ilst> {
        match self {
            Self::Mp4(ilst) => Some(ilst),
            _ => None,
        }
    }
}
