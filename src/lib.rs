// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Embed canonical track metadata and cover artwork into audio file tags.
//!
//! The crate operates on in-memory tag representations only. Callers read a
//! tag section from a file, wrap it in a [`TagContainer`], build a
//! [`MetadataRecord`], and invoke [`assemble`]. Writing the mutated container
//! back to disk is the caller's concern.

use std::result::Result as StdResult;

use image::{ImageError, ImageFormat};
use lofty::{error::LoftyError, file::FileType};
use thiserror::Error;

pub mod container;
pub mod fmt;
pub mod record;
pub mod util;

pub use container::TagContainer;
pub use fmt::assemble;
pub use record::MetadataRecord;
pub use util::artwork::{MAX_COVER_DIMENSION, OGG_COVER_MAX_DATA_SIZE, normalize};

#[derive(Error, Debug)]
pub enum Error {
    /// The inspected file type does not belong to any of the supported
    /// tagging schemes.
    #[error("unsupported container variant for file type {0:?}")]
    UnsupportedContainerVariant(FileType),

    /// The image bytes could not be decoded.
    #[error("unsupported image format")]
    UnsupportedImageFormat(#[source] ImageError),

    /// The image decoded, but its encoding is neither JPEG nor PNG and
    /// cannot be re-compressed.
    #[error("unsupported color encoding {0:?}")]
    UnsupportedColorEncoding(ImageFormat),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Tag(#[from] LoftyError),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub use super::{Error, Result};
}
