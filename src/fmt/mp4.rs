// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use lofty::{
    mp4::{Atom, AtomData, AtomIdent, Ilst},
    picture::{Picture, PictureType},
    tag::{ItemKey, MergeTag as _, SplitTag as _},
};

use crate::{MetadataRecord, Result, util::artwork};

const FREEFORM_MEAN: &str = "com.apple.iTunes";

/// Assembles `record` into the `ilst` atom of an MP4/M4A file.
///
/// Fields without a dedicated atom are written as
/// `----:com.apple.iTunes:<name>` free-form atoms onto the typed tag after
/// the generic merge, including the permalink and the display date. The
/// artwork replaces all pre-existing `covr` data; `covr` atoms carry no
/// description, so the artwork URL is not attached here.
pub(crate) fn assemble(ilst: &mut Ilst, record: &MetadataRecord) -> Result<()> {
    let (remainder, mut exported) = std::mem::take(ilst).split_tag();

    super::export_record(&mut exported, record);
    super::insert_or_remove(&mut exported, ItemKey::Comment, record.description.as_deref());

    if let Some(image_data) = &record.artwork_data {
        let mime_type = artwork::sniff_mime_type(image_data)?;
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime_type),
            None,
            image_data.clone(),
        );
        super::replace_pictures(&mut exported, picture);
    }

    *ilst = remainder.merge_tag(exported);

    // Post-processing on the typed tag
    replace_freeform(ilst, super::FREEFORM_LINK, record.link.clone());
    replace_freeform(ilst, super::FREEFORM_DISPLAY_DATE, record.display_date.clone());
    for (name, value) in super::freeform_fields(record) {
        replace_freeform(ilst, name, value);
    }

    Ok(())
}

fn replace_freeform(ilst: &mut Ilst, name: &'static str, value: Option<String>) {
    let ident = AtomIdent::Freeform {
        mean: Cow::Borrowed(FREEFORM_MEAN),
        name: Cow::Borrowed(name),
    };
    if let Some(value) = value {
        ilst.replace_atom(Atom::new(ident, AtomData::UTF8(value)));
    } else {
        ilst.remove(&ident).for_each(drop);
    }
}
