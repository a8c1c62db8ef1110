//! Angular algebra shared by every position model.
//!
//! All degree-valued quantities in the ephemeris live on the circle
//! `[0, 360)`. This crate provides the few primitives the rest of the
//! workspace composes:
//! - directional mod-360 sums and differences
//! - quadrant restoration for `atan` results
//! - degrees/minutes/seconds conversion

pub mod angle;
pub mod dms;

pub use angle::{
    ARCSEC_PER_DEGREE, ARCSEC_PER_RADIAN, diff_degrees, nearest_equivalent, nearest_separation,
    normalize_360, quadrant, sum_degrees,
};
pub use dms::{Dms, deg_to_dms, dms_to_deg};
