//! Screen-space geometry: body radii, arrow layout and label placement.

use orbit_view_config::ArrowSettings;
use orbit_view_core::vector::Vector3;

use crate::canvas::{HAlign, Point};

/// On-screen radius of a body, substituting `min_radius_px` when the scaled
/// physical radius falls below it.
pub fn pixel_radius(radius_m: f64, pixels_per_metre: f64, min_radius_px: f64) -> f64 {
    let scaled = radius_m * pixels_per_metre;
    if scaled.is_finite() && scaled >= min_radius_px {
        scaled
    } else {
        min_radius_px
    }
}

/// Unit direction of a model vector on screen (x right, y down), ignoring z.
pub fn screen_direction(v: &Vector3) -> Option<Point> {
    let (x, y) = (v[0], -v[1]);
    let n = x.hypot(y);
    if n > 0.0 && n.is_finite() {
        Some((x / n, y / n))
    } else {
        None
    }
}

/// Log-scaled arrow length for an acceleration magnitude.
///
/// Non-positive or non-finite magnitudes map to the minimum length, and so does
/// anything if the settings fail [`ArrowSettings::check`].
pub fn arrow_length(magnitude: f64, arrow: &ArrowSettings) -> f64 {
    if !(magnitude.is_finite() && magnitude > 0.0) || arrow.check().is_err() {
        return arrow.min_length_px;
    }
    let decades = (magnitude / arrow.threshold_m_s2).log10();
    (arrow.base_length_px + arrow.decade_length_px * decades)
        .clamp(arrow.min_length_px, arrow.max_length_px)
}

/// Arrowhead barb length for an arrow of `arrow_len` on a canvas of `canvas` size.
pub fn head_length(arrow_len: f64, canvas: (u32, u32), arrow: &ArrowSettings) -> f64 {
    let side = canvas.0.min(canvas.1) as f64;
    (arrow.head_fraction * side).min(0.4 * arrow_len)
}

/// The two barbs of an arrowhead at `tip` for an arrow pointing along `dir`.
pub fn arrow_head(tip: Point, dir: Point, barb_len: f64, half_angle: f64) -> [(Point, Point); 2] {
    let back = (-dir.0, -dir.1);
    let barb = |angle: f64| {
        let (sin, cos) = angle.sin_cos();
        let rotated = (back.0 * cos - back.1 * sin, back.0 * sin + back.1 * cos);
        (
            tip,
            (tip.0 + rotated.0 * barb_len, tip.1 + rotated.1 * barb_len),
        )
    };
    [barb(half_angle), barb(-half_angle)]
}

/// Labels on the left half of the canvas read rightwards; from the midline on,
/// they are right-aligned so they stay inside the canvas.
pub fn label_align(satellite_x: f64, canvas_width: u32) -> HAlign {
    if satellite_x < canvas_width as f64 / 2.0 {
        HAlign::Left
    } else {
        HAlign::Right
    }
}

/// Text anchor offset from `tip` away from the arrow, on the side matching `align`.
pub fn label_origin(tip: Point, align: HAlign, offset: f64) -> Point {
    match align {
        HAlign::Left => (tip.0 + offset, tip.1),
        HAlign::Right => (tip.0 - offset, tip.1),
    }
}

/// Point `distance` pixels from `origin` along unit `dir`.
#[inline]
pub fn offset_along(origin: Point, dir: Point, distance: f64) -> Point {
    (origin.0 + dir.0 * distance, origin.1 + dir.1 * distance)
}
