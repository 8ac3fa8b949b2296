#![allow(dead_code)]

use orbit_view::config::{RenderSettings, ViewConfig};
use orbit_view::constants::{AU_M, MOON_RADIUS_M, SUN_RADIUS_M};
use orbit_view::scenario::Accelerations;
use orbit_view::{
    CelestialBody, Color, EffectFlags, OrbitParameters, PlacedBody, Satellite, ShadowCondition,
    Snapshot,
};

pub use orbit_view::constants::EARTH_RADIUS_M;
pub const SCALE: f64 = 1.0e-5;

pub fn body(name: &str, radius_m: f64, color: Color) -> CelestialBody {
    CelestialBody {
        name: name.to_string(),
        radius_m,
        color,
        outline_color: Color::WHITE,
        image: None,
    }
}

/// Satellite 100 px right of the central body at scale 1e-5, everything off.
pub fn snapshot() -> Snapshot {
    Snapshot {
        name: "test".to_string(),
        view: ViewConfig::default(),
        settings: RenderSettings {
            show_legend: false,
            ..RenderSettings::default()
        },
        effects: EffectFlags::default(),
        central_body: body("Earth", EARTH_RADIUS_M, Color(0, 0, 255)),
        moon: PlacedBody {
            body: body("Moon", MOON_RADIUS_M, Color(128, 128, 128)),
            position_m: [-3.0e8, 2.0e8, 0.0],
        },
        sun: PlacedBody {
            body: body("Sun", SUN_RADIUS_M, Color(255, 255, 0)),
            position_m: [AU_M, 0.0, 0.0],
        },
        satellite: Satellite {
            name: "SAT".to_string(),
            position_m: [1.0e7, 0.0, 0.0],
            velocity_m_s: [0.0, 6_300.0, 0.0],
            size_px: 6.0,
            color: Color(250, 250, 250),
            image: None,
        },
        orbit: OrbitParameters {
            semi_major_axis_m: 1.0e7,
            eccentricity: 0.1,
        },
        accelerations: Accelerations {
            shadow: ShadowCondition::DirectSunlight,
            ..Accelerations::default()
        },
    }
}
