//! Equirectangular -> cubemap projection.
//!
//! Each face is a 90 degree pinhole capture from the sphere center, done
//! analytically: the ray through every output pixel is mapped back to
//! equirectangular coordinates and sampled, without rasterising geometry.

use std::time::Instant;

use glam::Vec3;
use image::RgbaImage;
use rayon::prelude::*;

use super::{rgba_buffer_len, Cubemap, ProjectionError};
use crate::geometry::{direction_to_angles, CubeFace, FaceCamera};
use crate::sampling::{pixel_center_uv, sample_bilinear, EdgeMode};

/// Captures all six faces at `size` x `size`.
///
/// Faces are rendered in parallel and share no mutable state.
pub fn equirect_to_cube(source: &RgbaImage, size: u32) -> Result<Cubemap, ProjectionError> {
    check_inputs(source, size)?;

    let start = Instant::now();
    let mut faces: [RgbaImage; 6] = std::array::from_fn(|_| RgbaImage::new(size, size));
    faces
        .par_iter_mut()
        .zip(CubeFace::all().par_iter())
        .for_each(|(target, &face)| render_face(source, face, target));

    log::info!(
        "Captured six {}x{} faces from {}x{} panorama in {:.2?}",
        size,
        size,
        source.width(),
        source.height(),
        start.elapsed()
    );
    Cubemap::from_faces(faces)
}

/// Captures a single face at `size` x `size`.
pub fn capture_face(
    source: &RgbaImage,
    face: CubeFace,
    size: u32,
) -> Result<RgbaImage, ProjectionError> {
    check_inputs(source, size)?;
    let mut target = RgbaImage::new(size, size);
    render_face(source, face, &mut target);
    Ok(target)
}

fn check_inputs(source: &RgbaImage, size: u32) -> Result<(), ProjectionError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ProjectionError::EmptySource);
    }
    rgba_buffer_len(size, size).map(|_| ())
}

fn render_face(source: &RgbaImage, face: CubeFace, target: &mut RgbaImage) {
    let camera = FaceCamera::for_face(face);
    let to_world = camera.view_to_world();
    let half = camera.half_extent();
    let (width, height) = target.dimensions();
    let row_len = width as usize * 4;

    let raw: &mut [u8] = target;
    raw.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        for (x, texel) in row.chunks_exact_mut(4).enumerate() {
            let (u, v) = pixel_center_uv(x as u32, y as u32, width, height);
            let local = Vec3::new((u * 2.0 - 1.0) * half, (v * 2.0 - 1.0) * half, -1.0);
            let dir = (to_world * local).normalize();
            let (eu, ev) = direction_to_angles(dir);
            let color = sample_bilinear(source, eu, ev, EdgeMode::WrapHorizontal);
            texel.copy_from_slice(&color.0);
        }
    });

    log::debug!("Captured {} face ({}x{})", face, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Panorama whose red channel encodes the column and green the row.
    fn ramp(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 255 / (width - 1)) as u8, (y * 255 / (height - 1)) as u8, 0, 255])
        })
    }

    #[test]
    fn test_face_sizes() {
        let cubemap = equirect_to_cube(&ramp(64, 32), 24).unwrap();
        for (_, img) in cubemap.iter() {
            assert_eq!(img.dimensions(), (24, 24));
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            equirect_to_cube(&RgbaImage::new(0, 0), 16),
            Err(ProjectionError::EmptySource)
        );
        assert_eq!(
            capture_face(&ramp(8, 4), CubeFace::Top, 0),
            Err(ProjectionError::InvalidDimensions(0, 0))
        );
        assert_eq!(
            equirect_to_cube(&ramp(8, 4), u32::MAX),
            Err(ProjectionError::InvalidDimensions(u32::MAX, u32::MAX))
        );
    }

    #[test]
    fn test_face_centers_sample_expected_longitudes() {
        // Front looks at the middle of the panorama, Right at a quarter.
        let src = ramp(256, 128);
        let front = capture_face(&src, CubeFace::Front, 17).unwrap();
        let right = capture_face(&src, CubeFace::Right, 17).unwrap();
        let left = capture_face(&src, CubeFace::Left, 17).unwrap();

        let red = |img: &RgbaImage| img.get_pixel(8, 8).0[0] as i32;
        assert!((red(&front) - 127).abs() <= 2, "front {}", red(&front));
        assert!((red(&right) - 64).abs() <= 2, "right {}", red(&right));
        assert!((red(&left) - 191).abs() <= 2, "left {}", red(&left));
    }

    #[test]
    fn test_top_and_bottom_sample_poles() {
        let src = ramp(256, 128);
        let top = capture_face(&src, CubeFace::Top, 17).unwrap();
        let bottom = capture_face(&src, CubeFace::Bottom, 17).unwrap();
        // Green encodes the row: 0 at the top of the panorama.
        assert!(top.get_pixel(8, 8).0[1] < 5);
        assert!(bottom.get_pixel(8, 8).0[1] > 250);
    }

    #[test]
    fn test_single_face_matches_full_capture() {
        let src = ramp(128, 64);
        let cubemap = equirect_to_cube(&src, 16).unwrap();
        for face in CubeFace::all() {
            let single = capture_face(&src, face, 16).unwrap();
            assert_eq!(&single, cubemap.face(face));
        }
    }
}
