//! Color selection for the perturbation overlays.

use orbit_view_config::Palette;

use crate::Color;
use crate::scene::ShadowCondition;

/// Contributor that dominates the combined third-body gravity vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravitySource {
    Lunar,
    Solar,
}

impl GravitySource {
    /// Larger magnitude wins; ties go to the moon.
    pub fn dominant(lunar_magnitude: f64, solar_magnitude: f64) -> Self {
        if lunar_magnitude >= solar_magnitude || solar_magnitude.is_nan() {
            GravitySource::Lunar
        } else {
            GravitySource::Solar
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GravitySource::Lunar => "Lunar a",
            GravitySource::Solar => "Solar a",
        }
    }

    pub fn color(self, palette: &Palette) -> Color {
        match self {
            GravitySource::Lunar => palette.lunar,
            GravitySource::Solar => palette.solar,
        }
    }
}

/// SRP arrow color for a shadow state.
pub fn shadow_color(shadow: ShadowCondition, palette: &Palette) -> Color {
    match shadow {
        ShadowCondition::DirectSunlight => palette.srp_direct,
        ShadowCondition::Penumbra => palette.srp_penumbra,
        ShadowCondition::Umbral => palette.srp_umbral,
    }
}
