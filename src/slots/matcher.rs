//! Assigns uploaded files to cube faces by their names.
//!
//! Faces are tried in the fixed order Right, Left, Top, Bottom, Front,
//! Back and the first match wins. A name matching patterns of two faces
//! therefore always goes to the earlier one.

use std::path::Path;

use image::RgbaImage;
use once_cell::sync::Lazy;
use regex::Regex;

use super::store::{FaceImage, FaceSlots};
use crate::geometry::CubeFace;

struct FacePattern {
    face: CubeFace,
    /// Matched anywhere in the name.
    words: &'static [&'static str],
    /// Matched only between separators (or the ends of the name).
    tokens: &'static [&'static str],
    /// Matched as the last separator-delimited part of the name.
    suffixes: &'static [&'static str],
}

const PATTERNS: [FacePattern; 6] = [
    FacePattern {
        face: CubeFace::Right,
        words: &["right", "posx", "pos_x", "positive_x"],
        tokens: &["px", "rt"],
        suffixes: &["r"],
    },
    FacePattern {
        face: CubeFace::Left,
        words: &["left", "negx", "neg_x", "negative_x"],
        tokens: &["nx", "lf"],
        suffixes: &["l"],
    },
    FacePattern {
        face: CubeFace::Top,
        words: &["top", "posy", "pos_y", "positive_y"],
        tokens: &["py", "up"],
        suffixes: &["u", "t"],
    },
    FacePattern {
        face: CubeFace::Bottom,
        words: &["bottom", "negy", "neg_y", "negative_y"],
        tokens: &["ny", "dn", "down"],
        suffixes: &["d"],
    },
    FacePattern {
        face: CubeFace::Front,
        words: &["front", "posz", "pos_z", "positive_z"],
        tokens: &["pz", "ft"],
        suffixes: &["f"],
    },
    FacePattern {
        face: CubeFace::Back,
        words: &["back", "negz", "neg_z", "negative_z"],
        tokens: &["nz", "bk"],
        suffixes: &["b"],
    },
];

fn alternation(items: &[&str]) -> String {
    items.iter().map(|s| regex::escape(s)).collect::<Vec<_>>().join("|")
}

fn compile(pattern: &FacePattern) -> Regex {
    let mut branches: Vec<String> = pattern.words.iter().map(|w| regex::escape(w)).collect();
    if !pattern.tokens.is_empty() {
        branches.push(format!(
            "(?:^|[^a-z0-9])(?:{})(?:[^a-z0-9]|$)",
            alternation(pattern.tokens)
        ));
    }
    if !pattern.suffixes.is_empty() {
        branches.push(format!("(?:^|[^a-z0-9])(?:{})$", alternation(pattern.suffixes)));
    }
    Regex::new(&branches.join("|")).expect("face name patterns are valid regexes")
}

static MATCHERS: Lazy<Vec<(CubeFace, Regex)>> =
    Lazy::new(|| PATTERNS.iter().map(|p| (p.face, compile(p))).collect());

/// Returns the face a file name refers to, if any.
///
/// Only the lower-cased file stem is considered, so directories and the
/// extension never influence the result.
pub fn match_face(file_name: &str) -> Option<CubeFace> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_lowercase();

    MATCHERS
        .iter()
        .find(|(_, re)| re.is_match(&stem))
        .map(|(face, _)| *face)
}

/// Outcome of a batch assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Files placed into slots, in input order.
    pub assigned: Vec<(CubeFace, String)>,
    /// Files whose names match no face.
    pub unmatched: Vec<String>,
}

impl MatchReport {
    /// Faces that received an image, in input order.
    pub fn assigned_faces(&self) -> Vec<CubeFace> {
        self.assigned.iter().map(|(face, _)| *face).collect()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }
}

/// Assigns each `(file name, image)` pair to the slot its name refers to.
///
/// Unmatched files are skipped and reported; they are never an error. The
/// file name becomes the slot label.
pub fn assign_by_name<I, S>(slots: &mut FaceSlots, files: I) -> MatchReport
where
    I: IntoIterator<Item = (S, RgbaImage)>,
    S: Into<String>,
{
    let mut report = MatchReport::default();

    for (name, image) in files {
        let name = name.into();
        match match_face(&name) {
            Some(face) => {
                if let Some(previous) = slots.assign(face, FaceImage::with_label(image, name.clone())) {
                    log::warn!(
                        "'{}' replaces {} in the {} slot",
                        name,
                        previous.label.as_deref().unwrap_or("an unnamed image"),
                        face
                    );
                }
                report.assigned.push((face, name));
            }
            None => {
                log::warn!("Could not match '{}' to a cube face", name);
                report.unmatched.push(name);
            }
        }
    }

    report
}
