//! Six named slots holding the uploaded cube faces.

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::CubeFace;
use crate::projection::{Cubemap, ProjectionError};

/// Errors that can occur when turning slots into a cubemap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Cubemap incomplete: missing {}", face_list(.missing))]
    Incomplete { missing: Vec<CubeFace> },
    #[error("Invalid face image: {0}")]
    Projection(#[from] ProjectionError),
}

fn face_list(faces: &[CubeFace]) -> String {
    faces.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}

/// A face image together with its display label (usually the file name).
#[derive(Debug, Clone, PartialEq)]
pub struct FaceImage {
    pub image: RgbaImage,
    pub label: Option<String>,
}

impl FaceImage {
    pub fn new(image: RgbaImage) -> Self {
        Self { image, label: None }
    }

    pub fn with_label(image: RgbaImage, label: impl Into<String>) -> Self {
        Self {
            image,
            label: Some(label.into()),
        }
    }
}

impl From<RgbaImage> for FaceImage {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

/// One optional, exclusively owned image per cube face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceSlots {
    slots: [Option<FaceImage>; 6],
}

impl FaceSlots {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `image` into the slot for `face`, returning what was there.
    pub fn assign(&mut self, face: CubeFace, image: impl Into<FaceImage>) -> Option<FaceImage> {
        let previous = self.slots[face.index()].replace(image.into());
        if previous.is_some() {
            log::debug!("Replaced image in '{}' slot", face);
        }
        previous
    }

    /// Returns the image in the slot for `face`.
    pub fn get(&self, face: CubeFace) -> Option<&FaceImage> {
        self.slots[face.index()].as_ref()
    }

    /// Removes and returns the image in the slot for `face`.
    pub fn take(&mut self, face: CubeFace) -> Option<FaceImage> {
        self.slots[face.index()].take()
    }

    /// Exchanges the contents (image and label) of two slots.
    pub fn swap(&mut self, a: CubeFace, b: CubeFace) {
        self.slots.swap(a.index(), b.index());
    }

    /// True if all six slots are populated.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of populated slots, for progress display.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Faces whose slot is empty, in export order.
    pub fn missing(&self) -> Vec<CubeFace> {
        CubeFace::all()
            .into_iter()
            .filter(|f| self.slots[f.index()].is_none())
            .collect()
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Iterates the populated slots in export order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &FaceImage)> {
        CubeFace::all()
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(face, slot)| slot.as_ref().map(|img| (face, img)))
    }

    /// Builds a cubemap from copies of the six images.
    pub fn cubemap(&self) -> Result<Cubemap, SlotError> {
        if !self.is_complete() {
            return Err(SlotError::Incomplete {
                missing: self.missing(),
            });
        }
        let faces = self
            .slots
            .each_ref()
            .map(|slot| slot.as_ref().map(|f| f.image.clone()).unwrap_or_default());
        Ok(Cubemap::from_faces(faces)?)
    }

    /// Moves the six images into a cubemap without copying.
    pub fn into_cubemap(self) -> Result<Cubemap, SlotError> {
        if !self.is_complete() {
            return Err(SlotError::Incomplete {
                missing: self.missing(),
            });
        }
        let faces = self.slots.map(|slot| slot.map(|f| f.image).unwrap_or_default());
        Ok(Cubemap::from_faces(faces)?)
    }
}
