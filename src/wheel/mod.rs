//! Game wheel geometry.
//!
//! Pure presentation math: where slices and labels go, and how far to turn
//! the wheel so the drawn slice stops under the pointer. The draw itself
//! happens in `pool`; nothing here chooses an outcome.
//!
//! ## Conventions
//!
//! - Angles grow clockwise (screen coordinates, y down).
//! - Slice 0 starts at 12 o'clock, where the pointer sits.
//! - Rotations are in degrees, cumulative across spins.

pub mod geometry;

pub use geometry::{
    describe_arc, label_anchor, plan_spin, polar_to_cartesian, resting_slice, slice_geometry,
    spin_target, truncate_label, LabelAnchor, Point, Slice, SpinPlan,
};
