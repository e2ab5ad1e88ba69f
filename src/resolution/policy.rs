//! Power-of-two size selection.

/// Smallest face size ever chosen.
pub const MIN_SIZE: u32 = 512;
/// Largest face size ever chosen.
pub const MAX_SIZE: u32 = 8192;
/// Sizes offered for export.
pub const STANDARD_SIZES: [u32; 5] = [512, 1024, 2048, 4096, 8192];
/// An equirectangular image spans this many face widths around the equator.
pub const FACES_AROUND_EQUATOR: u32 = 4;

/// What kind of image a reference width was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A full equirectangular panorama.
    Equirect,
    /// A single cube face.
    CubeFace,
}

/// A selectable export size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOption {
    pub size: u32,
    pub recommended: bool,
}

/// Chooses the face size for an equirectangular reference width.
///
/// The width is divided by [`FACES_AROUND_EQUATOR`], rounded to the
/// nearest power of two in log space and clamped to
/// [`MIN_SIZE`]..=[`MAX_SIZE`].
///
/// # Example
/// ```
/// use panocube::resolution::choose_size;
///
/// assert_eq!(choose_size(8192), 2048);
/// assert_eq!(choose_size(0), 512);
/// ```
pub fn choose_size(reference_width: u32) -> u32 {
    if reference_width == 0 {
        return MIN_SIZE;
    }
    let base = reference_width as f64 / FACES_AROUND_EQUATOR as f64;
    let exponent = base.log2().round();
    let size = 2f64.powf(exponent);
    size.clamp(MIN_SIZE as f64, MAX_SIZE as f64) as u32
}

/// Recommended face size for a source of the given kind and width.
///
/// Output equirectangular images are `2 * size` by `size`.
pub fn recommended_size(kind: SourceKind, width: u32) -> u32 {
    match kind {
        SourceKind::Equirect => choose_size(width),
        SourceKind::CubeFace => choose_size(width.saturating_mul(FACES_AROUND_EQUATOR)),
    }
}

/// Clamps a user-requested size into the supported range.
pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Dimensions of the equirectangular image produced for `size`.
pub fn equirect_dims(size: u32) -> (u32, u32) {
    (size.saturating_mul(2), size)
}

/// Lists the standard export sizes for an equirectangular reference width.
///
/// Sizes larger than both the source width and 4096 are hidden unless they
/// do not exceed the recommendation. Exactly one entry is recommended.
pub fn size_options(reference_width: u32) -> Vec<SizeOption> {
    let recommended = choose_size(reference_width);
    let ceiling = reference_width.max(4096);

    STANDARD_SIZES
        .iter()
        .copied()
        .filter(|&size| size <= ceiling || size <= recommended)
        .map(|size| SizeOption {
            size,
            recommended: size == recommended,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_size_reference_points() {
        assert_eq!(choose_size(4096), 1024);
        assert_eq!(choose_size(100), 512);
        assert_eq!(choose_size(100_000), 8192);
    }

    #[test]
    fn test_choose_size_rounds_in_log_space() {
        // 6000 / 4 = 1500, log2 = 10.55 -> 2048
        assert_eq!(choose_size(6000), 2048);
        // 5000 / 4 = 1250, log2 = 10.29 -> 1024
        assert_eq!(choose_size(5000), 1024);
    }

    #[test]
    fn test_choose_size_is_power_of_two_in_range() {
        for width in [0, 1, 7, 513, 2047, 3000, 9999, 16_384, 40_000, u32::MAX] {
            let size = choose_size(width);
            assert!(size.is_power_of_two(), "{} -> {}", width, size);
            assert!((MIN_SIZE..=MAX_SIZE).contains(&size), "{} -> {}", width, size);
        }
    }

    #[test]
    fn test_recommended_size_for_faces() {
        assert_eq!(recommended_size(SourceKind::CubeFace, 1024), 1024);
        assert_eq!(recommended_size(SourceKind::CubeFace, 2000), 2048);
        assert_eq!(recommended_size(SourceKind::CubeFace, 64), 512);
        assert_eq!(recommended_size(SourceKind::Equirect, 4096), 1024);
    }

    #[test]
    fn test_equirect_dims() {
        assert_eq!(equirect_dims(1024), (2048, 1024));
    }

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(10), 512);
        assert_eq!(clamp_size(3000), 3000);
        assert_eq!(clamp_size(20_000), 8192);
    }

    #[test]
    fn test_size_options_small_source() {
        let options = size_options(2048);
        let sizes: Vec<u32> = options.iter().map(|o| o.size).collect();
        assert_eq!(sizes, [512, 1024, 2048, 4096]);
        let recommended: Vec<u32> = options.iter().filter(|o| o.recommended).map(|o| o.size).collect();
        assert_eq!(recommended, [512]);
    }

    #[test]
    fn test_size_options_large_source() {
        let options = size_options(32_768);
        assert_eq!(options.len(), STANDARD_SIZES.len());
        assert!(options.iter().any(|o| o.size == 8192 && o.recommended));
    }
}
