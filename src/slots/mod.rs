//! Face slot storage and filename-based face assignment.

mod store;
mod matcher;

pub use store::{FaceImage, FaceSlots, SlotError};
pub use matcher::{assign_by_name, match_face, MatchReport};
