//! Six-face cubemap container.

use glam::Vec3;
use image::{Rgba, RgbaImage};

use super::ProjectionError;
use crate::geometry::{direction_to_face_coord, CubeFace};
use crate::sampling::{sample_bilinear, EdgeMode};

/// Six face images indexed by [`CubeFace`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cubemap {
    faces: [RgbaImage; 6],
}

impl Cubemap {
    /// Builds a cubemap from faces in [`CubeFace::all`] order.
    ///
    /// Faces are expected to be square and of equal size. Other shapes are
    /// still sampled correctly through UVs, but are reported.
    pub fn from_faces(faces: [RgbaImage; 6]) -> Result<Self, ProjectionError> {
        for face in CubeFace::all() {
            let (w, h) = faces[face.index()].dimensions();
            if w == 0 || h == 0 {
                return Err(ProjectionError::EmptyFace(face));
            }
            if w != h {
                log::warn!("Cube face '{}' is not square ({}x{})", face, w, h);
            }
        }

        let size = faces[0].width();
        if faces.iter().any(|f| f.width() != size) {
            log::warn!("Cube faces differ in size; sampling each at its own resolution");
        }

        Ok(Self { faces })
    }

    /// Returns the image for `face`.
    pub fn face(&self, face: CubeFace) -> &RgbaImage {
        &self.faces[face.index()]
    }

    /// Returns the width of the Right face (all faces are normally equal).
    pub fn size(&self) -> u32 {
        self.faces[CubeFace::Right.index()].width()
    }

    /// Iterates faces in export order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &RgbaImage)> {
        CubeFace::all().into_iter().zip(self.faces.iter())
    }

    /// Samples the cubemap along `dir` with bilinear filtering.
    pub fn sample(&self, dir: Vec3) -> Rgba<u8> {
        let coord = direction_to_face_coord(dir);
        sample_bilinear(self.face(coord.face), coord.u, coord.v, EdgeMode::Clamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face_uv_to_direction;
    use crate::sampling::pixel_center_uv;

    fn solid_faces(size: u32) -> [RgbaImage; 6] {
        CubeFace::all().map(|f| RgbaImage::from_pixel(size, size, Rgba([f.index() as u8 * 40, 0, 0, 255])))
    }

    #[test]
    fn test_rejects_empty_face() {
        let mut faces = solid_faces(8);
        faces[CubeFace::Top.index()] = RgbaImage::new(0, 0);
        assert_eq!(Cubemap::from_faces(faces), Err(ProjectionError::EmptyFace(CubeFace::Top)));
    }

    #[test]
    fn test_sample_picks_dominant_face() {
        let cubemap = Cubemap::from_faces(solid_faces(8)).unwrap();
        assert_eq!(cubemap.size(), 8);
        assert_eq!(cubemap.sample(Vec3::NEG_Z).0[0], CubeFace::Front.index() as u8 * 40);
        assert_eq!(cubemap.sample(Vec3::Y).0[0], CubeFace::Top.index() as u8 * 40);
        let faces: Vec<CubeFace> = cubemap.iter().map(|(f, _)| f).collect();
        assert_eq!(faces, CubeFace::all());
    }

    #[test]
    fn test_gradient_is_continuous_across_seams() {
        // Fill every face with a gradient of the texel direction, then read
        // both sides of each shared edge.
        let size = 64;
        let channel = |c: f32| ((c * 0.5 + 0.5) * 255.0).round() as u8;
        let faces = CubeFace::all().map(|face| {
            RgbaImage::from_fn(size, size, |x, y| {
                let (u, v) = pixel_center_uv(x, y, size, size);
                let d = face_uv_to_direction(face, u, v);
                Rgba([channel(d.x), channel(d.y), channel(d.z), 255])
            })
        });
        let cubemap = Cubemap::from_faces(faces).unwrap();

        for a in CubeFace::all() {
            for b in CubeFace::all() {
                if a == b || b == a.opposite() {
                    continue;
                }
                let na = crate::geometry::FaceOrientation::of(a).normal.vector();
                let nb = crate::geometry::FaceOrientation::of(b).normal.vector();
                let along = na.cross(nb);
                for i in 1..8 {
                    let t = i as f32 / 4.0 - 1.0;
                    let dir = (na + nb + along * t).normalize();
                    let ca = crate::geometry::face_uv(dir, a);
                    let cb = crate::geometry::face_uv(dir, b);
                    let pa = sample_bilinear(cubemap.face(a), ca.u, ca.v, EdgeMode::Clamp);
                    let pb = sample_bilinear(cubemap.face(b), cb.u, cb.v, EdgeMode::Clamp);
                    for ch in 0..3 {
                        let diff = (pa.0[ch] as i32 - pb.0[ch] as i32).abs();
                        assert!(
                            diff <= 4,
                            "seam {:?}/{:?} at t={}: {:?} vs {:?}",
                            a,
                            b,
                            t,
                            pa,
                            pb
                        );
                    }
                }
            }
        }
    }
}
