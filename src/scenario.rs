//! Scenario snapshots: a [`Simulation`] backed by a scenario file with
//! accelerations precomputed by an external simulator.

use std::path::Path;

use orbit_view_config::{
    AccelerationConfig, BodyConfig, ConfigError, PlacedBodyConfig, RenderSettings,
    SatelliteConfig, ScenarioConfig, ShadowConfig, ViewConfig, load_scenario,
};
use orbit_view_core::units::km_to_m;
use orbit_view_core::vector::{self, Vector3};

use crate::assets;
use crate::scene::{
    CelestialBody, EffectFlags, OrbitParameters, PerturbationModel, PlacedBody, Satellite,
    ShadowCondition, Simulation,
};

/// One frame of simulation state, frozen.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub name: String,
    pub view: ViewConfig,
    pub settings: RenderSettings,
    pub effects: EffectFlags,
    pub central_body: CelestialBody,
    pub moon: PlacedBody,
    pub sun: PlacedBody,
    pub satellite: Satellite,
    pub orbit: OrbitParameters,
    pub accelerations: Accelerations,
}

/// Per-effect accelerations (m/s²) and the shadow state reported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accelerations {
    pub lunar: Vector3,
    pub solar: Vector3,
    pub drag: Vector3,
    pub j2: Vector3,
    pub srp: Vector3,
    pub shadow: ShadowCondition,
}

impl Default for Accelerations {
    fn default() -> Self {
        Self {
            lunar: vector::ZERO,
            solar: vector::ZERO,
            drag: vector::ZERO,
            j2: vector::ZERO,
            srp: vector::ZERO,
            shadow: ShadowCondition::DirectSunlight,
        }
    }
}

impl Snapshot {
    /// Load and convert a YAML/TOML scenario. Sprite paths are resolved
    /// relative to the scenario file; unreadable sprites are dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = load_scenario(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_config(config, base))
    }

    /// Convert a parsed scenario. Relative sprite paths are joined onto `base`.
    pub fn from_config(config: ScenarioConfig, base: &Path) -> Self {
        let mut settings = config.settings;
        if let Some(moon_image) = settings.moon_image_path.take() {
            settings.moon_image_path = Some(base.join(moon_image));
        }
        Self {
            name: config.name,
            view: config.view,
            settings,
            effects: EffectFlags {
                lunar: config.effects.lunar,
                solar: config.effects.solar,
                drag: config.effects.drag,
                j2: config.effects.j2,
                srp: config.effects.srp,
            },
            central_body: body_from_config(&config.central_body, base),
            moon: placed_from_config(&config.moon, base),
            sun: placed_from_config(&config.sun, base),
            satellite: satellite_from_config(&config.satellite, base),
            orbit: OrbitParameters {
                semi_major_axis_m: km_to_m(config.orbit.semi_major_axis_km),
                eccentricity: config.orbit.eccentricity,
            },
            accelerations: config.accelerations.into(),
        }
    }
}

fn body_from_config(cfg: &BodyConfig, base: &Path) -> CelestialBody {
    CelestialBody {
        name: cfg.name.clone(),
        radius_m: km_to_m(cfg.radius_km),
        color: cfg.color,
        outline_color: cfg.outline_color.unwrap_or(cfg.color),
        image: cfg
            .image
            .as_ref()
            .and_then(|p| assets::load_optional(&base.join(p))),
    }
}

fn placed_from_config(cfg: &PlacedBodyConfig, base: &Path) -> PlacedBody {
    PlacedBody {
        body: body_from_config(&cfg.body, base),
        position_m: cfg.position_km.map(km_to_m),
    }
}

fn satellite_from_config(cfg: &SatelliteConfig, base: &Path) -> Satellite {
    Satellite {
        name: cfg.name.clone(),
        position_m: cfg.position_km.map(km_to_m),
        velocity_m_s: cfg.velocity_km_s.map(km_to_m),
        size_px: cfg.size_px,
        color: cfg.color,
        image: cfg
            .image
            .as_ref()
            .and_then(|p| assets::load_optional(&base.join(p))),
    }
}

impl From<ShadowConfig> for ShadowCondition {
    fn from(value: ShadowConfig) -> Self {
        match value {
            ShadowConfig::DirectSunlight => ShadowCondition::DirectSunlight,
            ShadowConfig::Penumbra => ShadowCondition::Penumbra,
            ShadowConfig::Umbral => ShadowCondition::Umbral,
        }
    }
}

impl From<AccelerationConfig> for Accelerations {
    fn from(value: AccelerationConfig) -> Self {
        Self {
            lunar: value.lunar_m_s2,
            solar: value.solar_m_s2,
            drag: value.drag_m_s2,
            j2: value.j2_m_s2,
            srp: value.srp_m_s2,
            shadow: value.shadow.into(),
        }
    }
}

impl PerturbationModel for Snapshot {
    fn lunar_acceleration(&self, _satellite: &Satellite) -> Vector3 {
        self.accelerations.lunar
    }

    fn solar_acceleration(&self, _satellite: &Satellite) -> Vector3 {
        self.accelerations.solar
    }

    fn drag_acceleration(&self, _satellite: &Satellite) -> Vector3 {
        self.accelerations.drag
    }

    fn j2_acceleration(&self, _satellite: &Satellite) -> Vector3 {
        self.accelerations.j2
    }

    fn srp_acceleration(&self, _satellite: &Satellite) -> Vector3 {
        self.accelerations.srp
    }

    fn shadow_condition(&self, _satellite: &Satellite) -> ShadowCondition {
        self.accelerations.shadow
    }
}

impl Simulation for Snapshot {
    fn effects(&self) -> EffectFlags {
        self.effects
    }

    fn central_body(&self) -> &CelestialBody {
        &self.central_body
    }

    fn moon(&self) -> &PlacedBody {
        &self.moon
    }

    fn sun(&self) -> &PlacedBody {
        &self.sun
    }

    fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    fn orbit(&self) -> OrbitParameters {
        self.orbit
    }
}
