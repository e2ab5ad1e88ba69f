//! Image decoding.

use std::path::Path;

use image::RgbaImage;

use super::FileError;
use crate::slots::{assign_by_name, match_face, FaceSlots, MatchReport};

/// Decodes any format supported by `image` into an RGBA8 buffer.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, FileError> {
    let image = image::open(path)?.to_rgba8();
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Assigns files to face slots by file name, decoding only the matches.
///
/// Files whose names match no face are reported in
/// [`MatchReport::unmatched`] without being opened, so stray non-image
/// files never abort the batch. A decode failure of a matched file does.
pub fn load_faces_by_name<P: AsRef<Path>>(
    paths: &[P],
    slots: &mut FaceSlots,
) -> Result<MatchReport, FileError> {
    let mut decoded = Vec::with_capacity(paths.len());
    let mut unmatched = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let name = display_name(path);
        if match_face(&name).is_some() {
            decoded.push((name, load_rgba(path)?));
        } else {
            log::warn!("Could not match '{}' to a cube face", name);
            unmatched.push(name);
        }
    }

    let mut report = assign_by_name(slots, decoded);
    report.unmatched.extend(unmatched);
    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
