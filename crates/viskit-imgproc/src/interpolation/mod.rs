//! Pixel interpolation for geometric image transformations.
//!
//! The warp and resize operations share a single bilinear sampling primitive
//! with a zero-pad boundary policy: lattice neighbors falling outside the
//! source image contribute zero to the interpolated value. They are not
//! clamped to the edge and not mirrored; downstream numeric behavior depends
//! on the zero contribution.

mod bilinear;

pub use bilinear::bilinear_sample;
