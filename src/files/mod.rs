//! Reading source images and writing PNG results.

mod decode;
mod png;

use thiserror::Error;

use crate::slots::SlotError;

pub use decode::{load_faces_by_name, load_rgba};
pub use png::{save_cubemap, save_equirect, save_png, PngExportOptions, DEFAULT_EQUIRECT_FILE_NAME};

/// Errors that can occur while reading or writing image files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Slot(#[from] SlotError),
}
