//! Face orientation table.
//!
//! Every face image is viewed from inside the cube. For each face the table
//! fixes the outward normal and which signed world axis runs along the
//! image's U (left to right) and V (bottom to top) directions. Both
//! projectors read this table, so a face written by one is read back with
//! the same pixel grid by the other.
//!
//! The U/V axes equal the screen-right and screen-up vectors of the capture
//! camera for that face (see [`super::FaceCamera`]).

use glam::Vec3;

use super::face::CubeFace;

/// A Cartesian axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the positive axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Reads this axis' component of `v`.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// An axis with a sign (+1.0 or -1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedAxis {
    pub axis: Axis,
    pub sign: f32,
}

impl SignedAxis {
    pub const fn pos(axis: Axis) -> Self {
        Self { axis, sign: 1.0 }
    }

    pub const fn neg(axis: Axis) -> Self {
        Self { axis, sign: -1.0 }
    }

    /// Projects `dir` onto this signed axis.
    pub fn read(self, dir: Vec3) -> f32 {
        self.sign * self.axis.component(dir)
    }

    /// The signed unit vector.
    pub fn vector(self) -> Vec3 {
        self.axis.unit() * self.sign
    }
}

/// Orientation of a single face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOrientation {
    pub face: CubeFace,
    /// Outward normal; its axis is the dominant axis for this face.
    pub normal: SignedAxis,
    /// World axis increasing with U.
    pub u: SignedAxis,
    /// World axis increasing with V.
    pub v: SignedAxis,
}

/// Orientation of all six faces, indexed by [`CubeFace::index`].
pub const ORIENTATION_TABLE: [FaceOrientation; 6] = [
    FaceOrientation {
        face: CubeFace::Right,
        normal: SignedAxis::pos(Axis::X),
        u: SignedAxis::pos(Axis::Z),
        v: SignedAxis::pos(Axis::Y),
    },
    FaceOrientation {
        face: CubeFace::Left,
        normal: SignedAxis::neg(Axis::X),
        u: SignedAxis::neg(Axis::Z),
        v: SignedAxis::pos(Axis::Y),
    },
    FaceOrientation {
        face: CubeFace::Top,
        normal: SignedAxis::pos(Axis::Y),
        u: SignedAxis::neg(Axis::X),
        v: SignedAxis::neg(Axis::Z),
    },
    FaceOrientation {
        face: CubeFace::Bottom,
        normal: SignedAxis::neg(Axis::Y),
        u: SignedAxis::neg(Axis::X),
        v: SignedAxis::pos(Axis::Z),
    },
    FaceOrientation {
        face: CubeFace::Front,
        normal: SignedAxis::neg(Axis::Z),
        u: SignedAxis::pos(Axis::X),
        v: SignedAxis::pos(Axis::Y),
    },
    FaceOrientation {
        face: CubeFace::Back,
        normal: SignedAxis::pos(Axis::Z),
        u: SignedAxis::neg(Axis::X),
        v: SignedAxis::pos(Axis::Y),
    },
];

impl FaceOrientation {
    /// Returns the table entry for `face`.
    pub fn of(face: CubeFace) -> &'static FaceOrientation {
        &ORIENTATION_TABLE[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_face() {
        for face in CubeFace::all() {
            assert_eq!(FaceOrientation::of(face).face, face);
        }
    }

    #[test]
    fn test_axes_are_orthogonal() {
        for entry in &ORIENTATION_TABLE {
            let n = entry.normal.vector();
            let u = entry.u.vector();
            let v = entry.v.vector();
            assert_eq!(n.dot(u), 0.0, "{:?}: normal not orthogonal to u", entry.face);
            assert_eq!(n.dot(v), 0.0, "{:?}: normal not orthogonal to v", entry.face);
            assert_eq!(u.dot(v), 0.0, "{:?}: u not orthogonal to v", entry.face);
        }
    }

    #[test]
    fn test_faces_are_viewed_from_inside() {
        // Seen from the cube center, u x v points back at the viewer.
        for entry in &ORIENTATION_TABLE {
            let uxv = entry.u.vector().cross(entry.v.vector());
            assert_eq!(uxv, -entry.normal.vector(), "{:?} is mirrored", entry.face);
        }
    }

    #[test]
    fn test_opposite_faces_have_opposite_normals() {
        for face in CubeFace::all() {
            let a = FaceOrientation::of(face).normal.vector();
            let b = FaceOrientation::of(face.opposite()).normal.vector();
            assert_eq!(a, -b);
        }
    }
}
