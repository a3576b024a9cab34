// src/core/render/geometry.rs
use std::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degree_to_radian(angle: f64) -> f64 {
    PI * angle / 180.0
}

/// Maps an angle on the chart circle to canvas coordinates.
///
/// Clock-face convention: 0 radians points straight up and angles grow
/// clockwise, unlike the standard math orientation.
#[must_use]
pub fn point_on_circle(cx: f64, cy: f64, radius: f64, radians: f64) -> (f64, f64) {
    (cx + radians.sin() * radius, cy - radians.cos() * radius)
}

/// Angular extent of one pie slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Slice {
    /// Angular midpoint, where the label is placed.
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + (self.end_deg - self.start_deg) / 2.0
    }

    /// SVG large-arc flag: 1 when this slice's own span reaches half the
    /// circle. Must be computed from the slice span, never from the
    /// cumulative angle.
    #[must_use]
    pub fn large_arc_flag(&self) -> u8 {
        let span = degree_to_radian(self.end_deg) - degree_to_radian(self.start_deg);
        u8::from(span >= PI)
    }
}
