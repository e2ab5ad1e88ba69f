//! Equirectangular panorama <-> cubemap conversion.
//!
//! This crate converts a 2:1 equirectangular panorama into the six faces of
//! a cubemap and back. Both directions share one face orientation table, so
//! faces written by one projector are read back unchanged by the other.

pub mod geometry;
pub mod sampling;
pub mod resolution;
pub mod projection;
pub mod slots;
pub mod session;
pub mod files;

pub use geometry::{CubeFace, FaceCoord};
pub use projection::{cube_to_equirect, equirect_to_cube, Cubemap, ProjectionError};
pub use resolution::{choose_size, recommended_size, SourceKind};
pub use slots::{FaceSlots, MatchReport, SlotError};
pub use session::{Mode, Session, SessionConfig, SessionError};
pub use files::{FileError, PngExportOptions};
