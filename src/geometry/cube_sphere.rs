//! Coordinate conversion between directions and cube-face UVs.

use glam::Vec3;

use super::direction::dominant_face;
use super::face::CubeFace;
use super::orientation::FaceOrientation;

/// A 2D coordinate within a cube face, with UV in [0, 1] range.
///
/// `u` grows to the right of the face image and `v` grows upward, so
/// `(0, 0)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCoord {
    /// The cube face this coordinate belongs to.
    pub face: CubeFace,
    /// U coordinate in [0, 1] range.
    pub u: f32,
    /// V coordinate in [0, 1] range.
    pub v: f32,
}

impl FaceCoord {
    /// Creates a new face coordinate.
    pub fn new(face: CubeFace, u: f32, v: f32) -> Self {
        Self { face, u, v }
    }

    /// Converts this face coordinate to a unit direction.
    pub fn to_direction(self) -> Vec3 {
        face_uv_to_cube(self.face, self.u, self.v).normalize()
    }
}

#[inline]
fn to_unit_range(s: f32) -> f32 {
    ((s + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Converts UV coordinates on a face to a point on the surface of the cube
/// spanning [-1, 1] on every axis.
pub fn face_uv_to_cube(face: CubeFace, u: f32, v: f32) -> Vec3 {
    let o = FaceOrientation::of(face);
    let s = u * 2.0 - 1.0;
    let t = v * 2.0 - 1.0;
    o.normal.vector() + o.u.vector() * s + o.v.vector() * t
}

/// Projects `dir` onto `face` and returns its UV coordinate.
///
/// The two in-face components are divided by the magnitude of the face's
/// dominant component and remapped from [-1, 1] to [0, 1]. Results are
/// clamped, so directions a hair past a face boundary still land on the
/// border texel.
pub fn face_uv(dir: Vec3, face: CubeFace) -> FaceCoord {
    let o = FaceOrientation::of(face);
    let major = o.normal.axis.component(dir).abs().max(f32::MIN_POSITIVE);

    let s = o.u.read(dir) / major;
    let t = o.v.read(dir) / major;
    FaceCoord::new(face, to_unit_range(s), to_unit_range(t))
}

/// Determines which face `dir` falls on and returns its UV coordinate.
pub fn direction_to_face_coord(dir: Vec3) -> FaceCoord {
    let (face, _) = dominant_face(dir);
    face_uv(dir, face)
}

/// Converts a face UV to a unit direction.
pub fn face_uv_to_direction(face: CubeFace, u: f32, v: f32) -> Vec3 {
    FaceCoord::new(face, u, v).to_direction()
}
