//! Bilinear interpolation over `image::RgbaImage`.

use image::{Rgba, RgbaImage};

/// How lookups outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Clamp to the border texel on both axes (cube faces).
    Clamp,
    /// Wrap around horizontally and clamp vertically (equirectangular
    /// images, whose left and right edges meet).
    WrapHorizontal,
}

/// Returns the texture coordinate of the center of pixel `(x, y)`.
///
/// Row 0 is the top of the image, so it maps to the largest `v`.
#[inline]
pub fn pixel_center_uv(x: u32, y: u32, width: u32, height: u32) -> (f32, f32) {
    let u = (x as f32 + 0.5) / width as f32;
    let v = 1.0 - (y as f32 + 0.5) / height as f32;
    (u, v)
}

#[inline]
fn clamp_index(i: i64, len: u32) -> u32 {
    i.clamp(0, len as i64 - 1) as u32
}

#[inline]
fn wrap_index(i: i64, len: u32) -> u32 {
    i.rem_euclid(len as i64) as u32
}

/// Samples `image` at `(u, v)` with bilinear filtering.
///
/// Coordinates outside [0, 1] never fail; they are clamped or wrapped
/// according to `edge`. An empty image samples as transparent black.
pub fn sample_bilinear(image: &RgbaImage, u: f32, v: f32, edge: EdgeMode) -> Rgba<u8> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let u = match edge {
        EdgeMode::Clamp => u.clamp(0.0, 1.0),
        EdgeMode::WrapHorizontal => u,
    };
    let v = v.clamp(0.0, 1.0);

    // Texel centers sit at half-integer positions.
    let fx = u * width as f32 - 0.5;
    let fy = (1.0 - v) * height as f32 - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;

    let (xa, xb) = match edge {
        EdgeMode::Clamp => (clamp_index(x0 as i64, width), clamp_index(x0 as i64 + 1, width)),
        EdgeMode::WrapHorizontal => (wrap_index(x0 as i64, width), wrap_index(x0 as i64 + 1, width)),
    };
    let ya = clamp_index(y0 as i64, height);
    let yb = clamp_index(y0 as i64 + 1, height);

    let p00 = image.get_pixel(xa, ya).0;
    let p10 = image.get_pixel(xb, ya).0;
    let p01 = image.get_pixel(xa, yb).0;
    let p11 = image.get_pixel(xb, yb).0;

    let mut out = [0u8; 4];
    for (ch, value) in out.iter_mut().enumerate() {
        let top = p00[ch] as f32 * (1.0 - tx) + p10[ch] as f32 * tx;
        let bottom = p01[ch] as f32 * (1.0 - tx) + p11[ch] as f32 * tx;
        let mixed = top * (1.0 - ty) + bottom * ty;
        *value = mixed.round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}
