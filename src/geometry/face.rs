//! Cube face identification and enumeration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifies one of the six cubemap faces.
///
/// Front is the `pz` slot and looks down -Z; Back is the `nz` slot and
/// looks down +Z. Both projectors use this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    Right = 0,
    /// -X face
    Left = 1,
    /// +Y face
    Top = 2,
    /// -Y face
    Bottom = 3,
    /// -Z face (`pz` slot)
    Front = 4,
    /// +Z face (`nz` slot)
    Back = 5,
}

/// Error returned when a string names no cube face.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown cube face: '{0}'")]
pub struct ParseFaceError(pub String);

impl CubeFace {
    /// Returns all six faces in export order.
    pub const fn all() -> [CubeFace; 6] {
        [
            CubeFace::Right,
            CubeFace::Left,
            CubeFace::Top,
            CubeFace::Bottom,
            CubeFace::Front,
            CubeFace::Back,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFace> {
        match index {
            0 => Some(CubeFace::Right),
            1 => Some(CubeFace::Left),
            2 => Some(CubeFace::Top),
            3 => Some(CubeFace::Bottom),
            4 => Some(CubeFace::Front),
            5 => Some(CubeFace::Back),
            _ => None,
        }
    }

    /// Returns the lower-case face name (e.g., "right", "bottom").
    pub const fn name(self) -> &'static str {
        match self {
            CubeFace::Right => "right",
            CubeFace::Left => "left",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
        }
    }

    /// Returns the upload slot key (e.g., "px", "ny").
    pub const fn slot_key(self) -> &'static str {
        match self {
            CubeFace::Right => "px",
            CubeFace::Left => "nx",
            CubeFace::Top => "py",
            CubeFace::Bottom => "ny",
            CubeFace::Front => "pz",
            CubeFace::Back => "nz",
        }
    }

    /// Returns the canonical export file name (e.g., "right.png").
    pub const fn file_name(self) -> &'static str {
        match self {
            CubeFace::Right => "right.png",
            CubeFace::Left => "left.png",
            CubeFace::Top => "top.png",
            CubeFace::Bottom => "bottom.png",
            CubeFace::Front => "front.png",
            CubeFace::Back => "back.png",
        }
    }

    /// Looks a face up by its slot key.
    pub fn from_slot_key(key: &str) -> Option<CubeFace> {
        CubeFace::all().into_iter().find(|f| f.slot_key() == key)
    }

    /// Returns the face sharing no edge with this one.
    pub const fn opposite(self) -> CubeFace {
        match self {
            CubeFace::Right => CubeFace::Left,
            CubeFace::Left => CubeFace::Right,
            CubeFace::Top => CubeFace::Bottom,
            CubeFace::Bottom => CubeFace::Top,
            CubeFace::Front => CubeFace::Back,
            CubeFace::Back => CubeFace::Front,
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeFace {
    type Err = ParseFaceError;

    /// Accepts face names and slot keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CubeFace::all()
            .into_iter()
            .find(|f| f.name() == lower || f.slot_key() == lower)
            .ok_or_else(|| ParseFaceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_faces() {
        let faces = CubeFace::all();
        assert_eq!(faces.len(), 6);
        for (i, face) in faces.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_from_index() {
        for i in 0..6 {
            let face = CubeFace::from_index(i).unwrap();
            assert_eq!(face.index(), i);
        }
        assert!(CubeFace::from_index(6).is_none());
    }

    #[test]
    fn test_slot_keys() {
        assert_eq!(CubeFace::Front.slot_key(), "pz");
        assert_eq!(CubeFace::Back.slot_key(), "nz");
        for face in CubeFace::all() {
            assert_eq!(CubeFace::from_slot_key(face.slot_key()), Some(face));
        }
        assert_eq!(CubeFace::from_slot_key("qz"), None);
    }

    #[test]
    fn test_file_names() {
        let names: Vec<&str> = CubeFace::all().iter().map(|f| f.file_name()).collect();
        assert_eq!(
            names,
            ["right.png", "left.png", "top.png", "bottom.png", "front.png", "back.png"]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("Right".parse::<CubeFace>(), Ok(CubeFace::Right));
        assert_eq!("ny".parse::<CubeFace>(), Ok(CubeFace::Bottom));
        assert!("sideways".parse::<CubeFace>().is_err());
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in CubeFace::all() {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }
}
