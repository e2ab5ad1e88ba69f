//! PNG export for cube faces and panoramas.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbaImage};

use super::FileError;
use crate::projection::Cubemap;

/// File name used when a panorama is saved into a directory.
pub const DEFAULT_EQUIRECT_FILE_NAME: &str = "panorama_2_1.png";

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngExportOptions {
    /// Fastest encoding, larger files.
    pub fn fast() -> Self {
        Self {
            compression: CompressionType::Fast,
            ..Default::default()
        }
    }

    /// Smallest files, slower encoding.
    pub fn best() -> Self {
        Self {
            compression: CompressionType::Best,
            ..Default::default()
        }
    }
}

/// Writes an RGBA8 image as a PNG file.
pub fn save_png(image: &RgbaImage, path: &Path, options: &PngExportOptions) -> Result<(), FileError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    log::debug!("Wrote {} ({}x{})", path.display(), image.width(), image.height());
    Ok(())
}

/// Writes the six faces as `right.png`, `left.png`, `top.png`,
/// `bottom.png`, `front.png` and `back.png` inside `output_dir`.
///
/// Returns the written paths in face order.
pub fn save_cubemap(
    cubemap: &Cubemap,
    output_dir: &Path,
    options: &PngExportOptions,
) -> Result<Vec<PathBuf>, FileError> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(6);
    for (face, image) in cubemap.iter() {
        let path = output_dir.join(face.file_name());
        save_png(image, &path, options)?;
        written.push(path);
    }
    Ok(written)
}

/// Writes a panorama. A directory `path` receives
/// [`DEFAULT_EQUIRECT_FILE_NAME`].
pub fn save_equirect(
    image: &RgbaImage,
    path: &Path,
    options: &PngExportOptions,
) -> Result<PathBuf, FileError> {
    let target = if path.is_dir() {
        path.join(DEFAULT_EQUIRECT_FILE_NAME)
    } else {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        path.to_path_buf()
    };
    save_png(image, &target, options)?;
    Ok(target)
}
