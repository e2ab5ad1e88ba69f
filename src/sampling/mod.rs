//! Texture sampling for RGBA8 images.
//!
//! Texture coordinates follow the usual GPU convention: `u` grows to the
//! right, `v` grows upward, and `(0, 0)` is the bottom-left corner of the
//! image. Pixel rows are still stored top-to-bottom.

mod bilinear;

pub use bilinear::{sample_bilinear, pixel_center_uv, EdgeMode};
