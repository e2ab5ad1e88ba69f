//! Cubemap geometry module.
//!
//! Provides the face enumeration, the face orientation table, conversions
//! between spherical angles, directions and face UVs, and the pinhole
//! cameras used to capture faces.

mod face;
mod direction;
mod orientation;
mod cube_sphere;
mod camera;

pub use face::{CubeFace, ParseFaceError};
pub use direction::{angles_to_direction, direction_to_angles, dominant_face, AXIS_TIE_EPSILON};
pub use orientation::{Axis, FaceOrientation, SignedAxis, ORIENTATION_TABLE};
pub use cube_sphere::{
    FaceCoord, face_uv, face_uv_to_cube, face_uv_to_direction, direction_to_face_coord,
};
pub use camera::{FaceCamera, CAPTURE_FOV_DEG};
