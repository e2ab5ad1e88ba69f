//! Projection between equirectangular panoramas and cubemaps.
//!
//! Both directions are pure per-pixel transforms parallelised with rayon.
//! They share the face orientation table, so an image converted one way
//! and back lands on the same pixel grid.

mod cubemap;
mod cube_to_equirect;
mod equirect_to_cube;

use thiserror::Error;

use crate::geometry::CubeFace;

pub use cubemap::Cubemap;
pub use cube_to_equirect::{cube_to_equirect, render_equirect};
pub use equirect_to_cube::{equirect_to_cube, capture_face};

/// Errors that can occur while projecting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Invalid output dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Source image is empty")]
    EmptySource,
    #[error("Cube face '{0}' is empty")]
    EmptyFace(CubeFace),
}

/// Validates output dimensions and returns the RGBA8 buffer length.
///
/// Zero sides and buffers whose size overflows `isize` are rejected here
/// rather than left to panic inside `RgbaImage::new`.
fn rgba_buffer_len(width: u32, height: u32) -> Result<usize, ProjectionError> {
    if width == 0 || height == 0 {
        return Err(ProjectionError::InvalidDimensions(width, height));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(ProjectionError::InvalidDimensions(width, height))
}
