//! Orbit geometry helpers used to lay out the static orbit ellipse and the J2 annotation.
use std::f64::consts::TAU;

use orbit_view_core::vector::{self, Vector3};

/// Shape of a Keplerian ellipse with the occupied focus at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub semi_major: f64,
    pub semi_minor: f64,
    /// Distance from the ellipse center to the occupied focus (`a * e`).
    pub focus_offset: f64,
}

impl EllipseShape {
    /// Build the ellipse for semi-major axis `a` and eccentricity `e`.
    ///
    /// Returns `None` for non-positive/non-finite `a` or `e` outside `[0, 1)`.
    pub fn new(semi_major: f64, eccentricity: f64) -> Option<Self> {
        if !(semi_major.is_finite() && semi_major > 0.0) {
            return None;
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return None;
        }
        Some(Self {
            semi_major,
            semi_minor: semi_minor_axis(semi_major, eccentricity),
            focus_offset: semi_major * eccentricity,
        })
    }

    /// Sample `segments` points around the ellipse, closed (first point repeated),
    /// in the focus-centred frame with the major axis along +x and periapsis at +x.
    pub fn sample(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(3);
        let mut points: Vec<(f64, f64)> = (0..segments)
            .map(|i| {
                let t = i as f64 * TAU / segments as f64;
                (
                    self.semi_major * t.cos() - self.focus_offset,
                    self.semi_minor * t.sin(),
                )
            })
            .collect();
        points.push(points[0]);
        points
    }
}

/// Semi-minor axis `b = a * sqrt(1 - e²)`.
#[inline]
pub fn semi_minor_axis(semi_major: f64, eccentricity: f64) -> f64 {
    semi_major * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Geocentric latitude in degrees, `asin(z / r)`. Zero at the origin.
pub fn latitude_deg(position: &Vector3) -> f64 {
    let r = vector::norm(position);
    if r <= 0.0 || !r.is_finite() {
        return 0.0;
    }
    (position[2] / r).clamp(-1.0, 1.0).asin().to_degrees()
}

/// Split `acceleration` into its radial (`a·r̂`, signed) and tangential (magnitude)
/// parts relative to `position`.
pub fn radial_tangential(position: &Vector3, acceleration: &Vector3) -> (f64, f64) {
    let Some(r_hat) = vector::unit(position) else {
        return (0.0, vector::norm(acceleration));
    };
    let radial = vector::dot(acceleration, &r_hat);
    let tangential = vector::sub(acceleration, &vector::scale(&r_hat, radial));
    (radial, vector::norm(&tangential))
}
