//! Conversion session.
//!
//! A [`Session`] holds everything one conversion needs: the active mode,
//! its source image(s) and the chosen output size. Projectors are called
//! with data taken from the session instead of from ambient state.

mod config;

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::CubeFace;
use crate::projection::{cube_to_equirect, equirect_to_cube, Cubemap, ProjectionError};
use crate::resolution::{clamp_size, recommended_size, size_options, SizeOption, SourceKind};
use crate::slots::{assign_by_name, FaceImage, FaceSlots, MatchReport, SlotError};

pub use config::SessionConfig;

/// Which conversion the session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One panorama in, six faces out.
    EquirectToCube,
    /// Six faces in, one panorama out.
    CubeToEquirect,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::EquirectToCube => "equirect-to-cube",
            Mode::CubeToEquirect => "cube-to-equirect",
        }
    }
}

/// Errors reported by session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No panorama loaded")]
    MissingSource,
    #[error("Operation requires {expected} mode, session is in {actual} mode", expected = .expected.name(), actual = .actual.name())]
    WrongMode { expected: Mode, actual: Mode },
    #[error(transparent)]
    Slots(#[from] SlotError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// State of one conversion request.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    config: SessionConfig,
    equirect: Option<RgbaImage>,
    slots: FaceSlots,
}

impl Session {
    /// Creates an empty session in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self::with_config(mode, SessionConfig::default())
    }

    pub fn with_config(mode: Mode, config: SessionConfig) -> Self {
        Self {
            mode,
            config,
            equirect: None,
            slots: FaceSlots::new(),
        }
    }

    /// Creates a cube-to-equirect session around already filled slots.
    pub fn from_slots(slots: FaceSlots, config: SessionConfig) -> Self {
        Self {
            mode: Mode::CubeToEquirect,
            config,
            equirect: None,
            slots,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Switches mode, dropping every loaded image.
    pub fn switch_mode(&mut self, mode: Mode) {
        log::debug!("Switching session from {} to {}", self.mode.name(), mode.name());
        self.mode = mode;
        self.equirect = None;
        self.slots.clear();
    }

    fn require(&self, expected: Mode) -> Result<(), SessionError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SessionError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }

    /// Sets the panorama to convert.
    pub fn load_equirect(&mut self, image: RgbaImage) -> Result<(), SessionError> {
        self.require(Mode::EquirectToCube)?;
        log::info!(
            "Loaded {}x{} panorama, recommended face size {}",
            image.width(),
            image.height(),
            recommended_size(SourceKind::Equirect, image.width())
        );
        self.equirect = Some(image);
        Ok(())
    }

    pub fn equirect(&self) -> Option<&RgbaImage> {
        self.equirect.as_ref()
    }

    pub fn slots(&self) -> &FaceSlots {
        &self.slots
    }

    /// Puts a face image into its slot.
    pub fn assign_face(
        &mut self,
        face: CubeFace,
        image: impl Into<FaceImage>,
    ) -> Result<Option<FaceImage>, SessionError> {
        self.require(Mode::CubeToEquirect)?;
        Ok(self.slots.assign(face, image))
    }

    /// Exchanges two face slots.
    pub fn swap_faces(&mut self, a: CubeFace, b: CubeFace) -> Result<(), SessionError> {
        self.require(Mode::CubeToEquirect)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Assigns a batch of named images to faces by file name.
    pub fn assign_by_name<I, S>(&mut self, files: I) -> Result<MatchReport, SessionError>
    where
        I: IntoIterator<Item = (S, RgbaImage)>,
        S: Into<String>,
    {
        self.require(Mode::CubeToEquirect)?;
        Ok(assign_by_name(&mut self.slots, files))
    }

    /// Loaded faces out of six.
    pub fn progress(&self) -> (usize, usize) {
        (self.slots.filled_count(), 6)
    }

    /// Width the resolution policy is driven by, once a source is present.
    fn reference(&self) -> Option<(SourceKind, u32)> {
        match self.mode {
            Mode::EquirectToCube => self
                .equirect
                .as_ref()
                .map(|img| (SourceKind::Equirect, img.width())),
            // Any loaded face stands in for the set; Right is preferred.
            Mode::CubeToEquirect => self
                .slots
                .iter()
                .next()
                .map(|(_, face)| (SourceKind::CubeFace, face.image.width())),
        }
    }

    /// Size the resolution policy recommends for the current source.
    pub fn recommended_size(&self) -> Option<u32> {
        self.reference().map(|(kind, width)| recommended_size(kind, width))
    }

    /// Export sizes to offer for the current source.
    pub fn size_options(&self) -> Vec<SizeOption> {
        match self.reference() {
            Some((SourceKind::Equirect, width)) => size_options(width),
            Some((SourceKind::CubeFace, width)) => size_options(width.saturating_mul(4)),
            None => Vec::new(),
        }
    }

    /// Overrides the output size (clamped), or restores the recommendation.
    pub fn set_size(&mut self, size: Option<u32>) {
        self.config.size = size.map(clamp_size);
    }

    /// Size used for the next export, always within the supported range.
    pub fn output_size(&self) -> Option<u32> {
        self.config
            .size
            .map(clamp_size)
            .or_else(|| self.recommended_size())
    }

    /// Converts the loaded panorama into six faces.
    pub fn export_cubemap(&self) -> Result<Cubemap, SessionError> {
        self.require(Mode::EquirectToCube)?;
        let source = self.equirect.as_ref().ok_or(SessionError::MissingSource)?;
        let size = self
            .output_size()
            .unwrap_or_else(|| recommended_size(SourceKind::Equirect, source.width()));
        Ok(equirect_to_cube(source, size)?)
    }

    /// Converts the six loaded faces into a panorama.
    pub fn export_equirect(&self) -> Result<RgbaImage, SessionError> {
        self.require(Mode::CubeToEquirect)?;
        let cubemap = self.slots.cubemap()?;
        let size = self
            .output_size()
            .unwrap_or_else(|| recommended_size(SourceKind::CubeFace, cubemap.size()));
        Ok(cube_to_equirect(&cubemap, size)?)
    }
}
