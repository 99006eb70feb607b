//! Slice layout and spin targets.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::config::WheelConfig;
use crate::core::rng::DrawRng;

/// A point in wheel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One wedge of the wheel, angles in radians clockwise from 12 o'clock.
///
/// These are wheel angles, not screen angles: use [`Slice::path`] to draw
/// one, or subtract `FRAC_PI_2` before calling [`describe_arc`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub start_rad: f64,
    pub end_rad: f64,
    pub color: String,
}

impl Slice {
    /// SVG path for this wedge on a wheel centred at (`cx`, `cy`).
    #[must_use]
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        describe_arc(cx, cy, r, self.start_rad - FRAC_PI_2, self.end_rad - FRAC_PI_2)
    }
}

/// Where to draw a slice label and how much to rotate the text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub position: Point,
    pub rotate_deg: f64,
}

/// A fully determined spin, ready to animate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpinPlan {
    /// Slice that will stop under the pointer.
    pub index: usize,
    /// Whole turns added for show.
    pub extra_spins: u32,
    /// Cumulative wheel rotation once the animation ends.
    pub target_deg: f64,
    /// Animation length.
    pub duration_ms: u64,
}

#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_rad: f64) -> Point {
    Point {
        x: cx + r * angle_rad.cos(),
        y: cy + r * angle_rad.sin(),
    }
}

/// SVG path for a pie wedge between two angles.
///
/// Angles are screen radians: 0 points at 3 o'clock. A [`Slice`] measures
/// from 12 o'clock, so its angles need `FRAC_PI_2` subtracted first.
#[must_use]
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_rad: f64, end_rad: f64) -> String {
    let start = polar_to_cartesian(cx, cy, r, end_rad);
    let end = polar_to_cartesian(cx, cy, r, start_rad);
    let large_arc = if end_rad - start_rad <= PI { 0 } else { 1 };
    format!(
        "M {cx} {cy} L {} {} A {r} {r} 0 {large_arc} 0 {} {} Z",
        start.x, start.y, end.x, end.y
    )
}

/// Lay out `n` equal slices, colours cycling through `palette`.
///
/// An empty wheel still gets one full-circle slice so there is something to
/// draw. An empty palette leaves every colour blank.
#[must_use]
pub fn slice_geometry(n: usize, palette: &[String]) -> Vec<Slice> {
    let n = n.max(1);
    (0..n)
        .map(|i| Slice {
            index: i,
            start_rad: i as f64 / n as f64 * TAU,
            end_rad: (i + 1) as f64 / n as f64 * TAU,
            color: if palette.is_empty() {
                String::new()
            } else {
                palette[i % palette.len()].clone()
            },
        })
        .collect()
}

/// Label anchor at the middle of slice `i`, `r` from the centre.
#[must_use]
pub fn label_anchor(i: usize, n: usize, cx: f64, cy: f64, r: f64) -> LabelAnchor {
    let n = n.max(1) as f64;
    let angle = i as f64 / n * TAU + PI / n - FRAC_PI_2;
    LabelAnchor {
        position: polar_to_cartesian(cx, cy, r, angle),
        rotate_deg: angle.to_degrees(),
    }
}

/// Cut a label to `max_chars` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

/// Rotation at which slice `index` of `n` rests under the pointer.
///
/// The result is `current_deg` plus `extra_spins` whole turns plus the
/// forward turn needed to centre the slice, so consecutive spins keep
/// turning the same way and land correctly whatever `current_deg` was.
///
/// Panics if `index >= n`.
#[must_use]
pub fn spin_target(current_deg: f64, n: usize, index: usize, extra_spins: u32) -> f64 {
    assert!(index < n, "slice {index} out of range for {n} slices");

    let slice = 360.0 / n as f64;
    let centre = index as f64 * slice + slice / 2.0;
    let forward = (360.0 - centre - current_deg.rem_euclid(360.0)).rem_euclid(360.0);
    current_deg + f64::from(extra_spins) * 360.0 + forward
}

/// Which of `n` slices sits under the pointer at `rotation_deg`.
#[must_use]
pub fn resting_slice(rotation_deg: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let slice = 360.0 / n as f64;
    let under_pointer = (-rotation_deg).rem_euclid(360.0);
    ((under_pointer / slice) as usize).min(n - 1)
}

/// Pick the extra turns and compute the full spin for slice `index` of `n`.
///
/// The extra turns are drawn between the configured bounds, whichever
/// order they are given in.
pub fn plan_spin(
    current_deg: f64,
    n: usize,
    index: usize,
    config: &WheelConfig,
    rng: &mut DrawRng,
) -> SpinPlan {
    let low = config.min_extra_spins.min(config.max_extra_spins);
    let high = config.min_extra_spins.max(config.max_extra_spins);
    let extra_spins = rng.gen_range_inclusive(low..=high);
    SpinPlan {
        index,
        extra_spins,
        target_deg: spin_target(current_deg, n, index, extra_spins),
        duration_ms: config.spin_duration_ms,
    }
}
