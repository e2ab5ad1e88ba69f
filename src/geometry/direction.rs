//! Spherical angle <-> direction conversion and dominant-face selection.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::face::CubeFace;

/// Absolute components closer than this are treated as tied.
///
/// Ties resolve by the fixed priority X > Y > Z, so directions exactly on a
/// cube edge or corner pick the same face on every platform.
pub const AXIS_TIE_EPSILON: f32 = 1e-6;

/// Converts equirectangular texture coordinates to a unit direction.
///
/// `u` spans longitude left to right, `v` spans latitude bottom (south pole)
/// to top (north pole). The image center `(0.5, 0.5)` looks down -Z.
///
/// # Example
/// ```
/// use panocube::geometry::angles_to_direction;
///
/// let forward = angles_to_direction(0.5, 0.5);
/// assert!((forward.z + 1.0).abs() < 1e-6);
/// ```
pub fn angles_to_direction(u: f32, v: f32) -> Vec3 {
    let lon = (u - 0.5) * TAU;
    let lat = (v - 0.5) * PI;

    let (slon, clon) = lon.sin_cos();
    let (slat, clat) = lat.sin_cos();
    Vec3::new(-clat * slon, slat, -clat * clon)
}

/// Converts a unit direction back to equirectangular texture coordinates.
///
/// Exact inverse of [`angles_to_direction`]. `u` lies in `[0, 1]` and wraps
/// around at the back of the sphere (+Z).
pub fn direction_to_angles(dir: Vec3) -> (f32, f32) {
    let lon = (-dir.x).atan2(-dir.z);
    let lat = dir.y.clamp(-1.0, 1.0).asin();

    let u = lon / TAU + 0.5;
    let v = lat / PI + 0.5;
    (u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
}

/// Picks the face whose axis dominates `dir`.
///
/// Returns the face together with the signed value of the dominant
/// component. A zero component counts as positive.
pub fn dominant_face(dir: Vec3) -> (CubeFace, f32) {
    let abs = dir.abs();

    if abs.x + AXIS_TIE_EPSILON >= abs.y && abs.x + AXIS_TIE_EPSILON >= abs.z {
        let face = if dir.x >= 0.0 { CubeFace::Right } else { CubeFace::Left };
        (face, dir.x)
    } else if abs.y + AXIS_TIE_EPSILON >= abs.z {
        let face = if dir.y >= 0.0 { CubeFace::Top } else { CubeFace::Bottom };
        (face, dir.y)
    } else {
        let face = if dir.z >= 0.0 { CubeFace::Back } else { CubeFace::Front };
        (face, dir.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_looks_forward() {
        let dir = angles_to_direction(0.5, 0.5);
        assert!((dir - Vec3::NEG_Z).length() < 1e-6, "got {:?}", dir);
    }

    #[test]
    fn test_poles() {
        let north = angles_to_direction(0.3, 1.0);
        let south = angles_to_direction(0.8, 0.0);
        assert!((north - Vec3::Y).length() < 1e-5);
        assert!((south - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_quarter_turns() {
        // Longitude runs from +X at u=0.25 to -X at u=0.75.
        let a = angles_to_direction(0.25, 0.5);
        let b = angles_to_direction(0.75, 0.5);
        let back = angles_to_direction(0.0, 0.5);
        assert!((a - Vec3::X).length() < 1e-5, "got {:?}", a);
        assert!((b - Vec3::NEG_X).length() < 1e-5, "got {:?}", b);
        assert!((back - Vec3::Z).length() < 1e-5, "got {:?}", back);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let steps = 64;
        for i in 0..=steps {
            for j in 0..=steps {
                let u = i as f32 / steps as f32;
                let v = j as f32 / steps as f32;
                let len = angles_to_direction(u, v).length();
                assert!(
                    (len - 1.0).abs() < 1e-5,
                    "({}, {}) produced length {}",
                    u,
                    v,
                    len
                );
            }
        }
    }

    #[test]
    fn test_angles_roundtrip() {
        for &u in &[0.05, 0.2, 0.37, 0.5, 0.63, 0.8, 0.95] {
            for &v in &[0.05, 0.25, 0.5, 0.75, 0.95] {
                let (u2, v2) = direction_to_angles(angles_to_direction(u, v));
                assert!(
                    (u - u2).abs() < 1e-4 && (v - v2).abs() < 1e-4,
                    "({}, {}) came back as ({}, {})",
                    u,
                    v,
                    u2,
                    v2
                );
            }
        }
    }

    #[test]
    fn test_dominant_face_axes() {
        let cases = [
            (Vec3::X, CubeFace::Right),
            (Vec3::NEG_X, CubeFace::Left),
            (Vec3::Y, CubeFace::Top),
            (Vec3::NEG_Y, CubeFace::Bottom),
            (Vec3::NEG_Z, CubeFace::Front),
            (Vec3::Z, CubeFace::Back),
        ];
        for (dir, expected) in cases {
            let (face, value) = dominant_face(dir);
            assert_eq!(face, expected, "wrong face for {:?}", dir);
            assert!((value.abs() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_dominant_face_tie_break() {
        // Edges and corners resolve X before Y before Z.
        assert_eq!(dominant_face(Vec3::new(1.0, 1.0, 0.0).normalize()).0, CubeFace::Right);
        assert_eq!(dominant_face(Vec3::new(-1.0, 0.0, 1.0).normalize()).0, CubeFace::Left);
        assert_eq!(dominant_face(Vec3::new(0.0, -1.0, -1.0).normalize()).0, CubeFace::Bottom);
        assert_eq!(dominant_face(Vec3::new(1.0, -1.0, 1.0).normalize()).0, CubeFace::Right);
        // Within epsilon still counts as a tie.
        let nearly = Vec3::new(0.7071067, 0.7071068, 0.0);
        assert_eq!(dominant_face(nearly).0, CubeFace::Right);
    }
}
