//! Cubemap -> equirectangular projection.

use std::time::Instant;

use image::RgbaImage;
use rayon::prelude::*;

use super::{rgba_buffer_len, Cubemap, ProjectionError};
use crate::geometry::{angles_to_direction, dominant_face, face_uv};
use crate::resolution::equirect_dims;
use crate::sampling::{pixel_center_uv, sample_bilinear, EdgeMode};

/// Projects a cubemap onto a `2 * size` by `size` equirectangular image.
///
/// Row 0 of the result is the top (north pole) of the panorama.
pub fn cube_to_equirect(cubemap: &Cubemap, size: u32) -> Result<RgbaImage, ProjectionError> {
    let (width, height) = equirect_dims(size);
    render_equirect(cubemap, width, height)
}

/// Projects a cubemap onto an equirectangular image of arbitrary size.
///
/// Every output pixel is independent: its center is converted to a
/// direction, the dominant face is picked, and that face is sampled
/// bilinearly at the face UV. Rows are rendered in parallel.
pub fn render_equirect(
    cubemap: &Cubemap,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ProjectionError> {
    rgba_buffer_len(width, height)?;

    let start = Instant::now();
    let mut img = RgbaImage::new(width, height);
    let row_len = width as usize * 4;

    let raw: &mut [u8] = &mut img;
    raw.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        for (x, texel) in row.chunks_exact_mut(4).enumerate() {
            let (u, v) = pixel_center_uv(x as u32, y as u32, width, height);
            let dir = angles_to_direction(u, v);
            let (face, _) = dominant_face(dir);
            let coord = face_uv(dir, face);
            let color = sample_bilinear(cubemap.face(face), coord.u, coord.v, EdgeMode::Clamp);
            texel.copy_from_slice(&color.0);
        }
    });

    log::info!(
        "Rendered {}x{} equirectangular image from {}px faces in {:.2?}",
        width,
        height,
        cubemap.size(),
        start.elapsed()
    );
    Ok(img)
}
