//! Output resolution policy.
//!
//! Picks power-of-two face sizes from source image widths and lists the
//! standard sizes offered for export.

mod policy;

pub use policy::{
    choose_size, recommended_size, clamp_size, equirect_dims, size_options,
    SizeOption, SourceKind, MIN_SIZE, MAX_SIZE, STANDARD_SIZES, FACES_AROUND_EQUATOR,
};
