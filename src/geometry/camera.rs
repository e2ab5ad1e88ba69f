//! Pinhole cameras used to capture cube faces from the sphere center.

use glam::{Mat3, Vec3};

use super::face::CubeFace;

/// Vertical (and horizontal) field of view of every face capture.
pub const CAPTURE_FOV_DEG: f32 = 90.0;

/// A camera at the origin looking along one cube axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCamera {
    /// Look-at direction.
    pub forward: Vec3,
    /// Up hint; the true up vector is re-orthogonalized against `forward`.
    pub up: Vec3,
}

impl FaceCamera {
    /// Returns the capture camera for `face`.
    ///
    /// Top and Bottom use -Z and +Z as their up vectors so that the captured
    /// pixel grid lines up with the face orientation table.
    pub const fn for_face(face: CubeFace) -> Self {
        let (forward, up) = match face {
            CubeFace::Right => (Vec3::X, Vec3::Y),
            CubeFace::Left => (Vec3::NEG_X, Vec3::Y),
            CubeFace::Top => (Vec3::Y, Vec3::NEG_Z),
            CubeFace::Bottom => (Vec3::NEG_Y, Vec3::Z),
            CubeFace::Front => (Vec3::NEG_Z, Vec3::Y),
            CubeFace::Back => (Vec3::Z, Vec3::Y),
        };
        Self { forward, up }
    }

    /// Rotation from camera space (x right, y up, looking down -z) to world
    /// space. Same basis as `Mat4::look_at_rh`.
    pub fn view_to_world(&self) -> Mat3 {
        let right = self.forward.cross(self.up).normalize();
        let up = right.cross(self.forward);
        Mat3::from_cols(right, up, -self.forward)
    }

    /// Half-width of the image plane at unit distance.
    pub fn half_extent(&self) -> f32 {
        (CAPTURE_FOV_DEG.to_radians() * 0.5).tan()
    }

    /// Unit world-space ray through the image point `(u, v)`, with `v`
    /// growing upward.
    pub fn ray(&self, u: f32, v: f32) -> Vec3 {
        let half = self.half_extent();
        let local = Vec3::new((u * 2.0 - 1.0) * half, (v * 2.0 - 1.0) * half, -1.0);
        (self.view_to_world() * local).normalize()
    }
}
