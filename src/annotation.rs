//! Arrow + label annotations and the text formats used in them.

use crate::Color;
use crate::canvas::{HAlign, Point};
use crate::scene::ShadowCondition;

/// Latitudes closer to the equator than this get the "near equator" qualifier.
pub const NEAR_EQUATOR_DEG: f64 = 2.3;
/// Latitudes beyond this get the "high lat" qualifier.
pub const HIGH_LATITUDE_DEG: f64 = 75.0;

/// A laid-out arrow in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLayout {
    pub start: Point,
    pub end: Point,
    pub barbs: [(Point, Point); 2],
    pub length: f64,
}

/// One perturbation overlay: an optional arrow plus its label block.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorAnnotation {
    pub arrow: Option<ArrowLayout>,
    pub color: Color,
    pub lines: Vec<String>,
    pub anchor: Point,
    pub align: HAlign,
}

/// C-style scientific notation: `1.00e-05`, `3.20e+02`.
pub fn format_sci(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// `"<name>: 1.00e-05 m/s²"`.
pub fn magnitude_label(name: &str, magnitude: f64) -> String {
    format!("{name}: {} m/s²", format_sci(magnitude, 2))
}

/// Radial/tangential split of the J2 acceleration.
pub fn components_label(radial: f64, tangential: f64) -> String {
    format!(
        "Rad: {} Tan: {}",
        format_sci(radial, 2),
        format_sci(tangential, 2)
    )
}

/// Hemisphere with an optional latitude-band qualifier, e.g. `"North, high lat (78.4°)"`.
pub fn hemisphere_label(latitude_deg: f64) -> String {
    let hemisphere = if latitude_deg >= 0.0 { "North" } else { "South" };
    let band = latitude_deg.abs();
    let qualifier = if band < NEAR_EQUATOR_DEG {
        ", near equator"
    } else if band > HIGH_LATITUDE_DEG {
        ", high lat"
    } else {
        ""
    };
    format!("{hemisphere}{qualifier} ({latitude_deg:.1}°)")
}

/// Illumination percentage, e.g. `"Lit: 50%"`.
pub fn lit_label(shadow: ShadowCondition) -> String {
    format!("Lit: {:.0}%", shadow.lighting_factor() * 100.0)
}

/// Screen direction pointing away from the sun, e.g. `"Away:(0.71,-0.71)"`.
pub fn away_label(away: Point) -> String {
    format!("Away:({:.2},{:.2})", away.0, away.1)
}
