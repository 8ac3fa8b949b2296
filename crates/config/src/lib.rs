//! Configuration models and loaders for orbit_view scenarios.

use std::f64::consts::PI;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque RGB color, written as `[r, g, b]` in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const BLACK: Self = Self(0, 0, 0);
    pub const ORANGE: Self = Self(255, 165, 0);
}

/// A full scenario: one frame's worth of simulation state plus view and styling.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub settings: RenderSettings,
    #[serde(default)]
    pub effects: EffectsConfig,
    pub central_body: BodyConfig,
    pub moon: PlacedBodyConfig,
    pub sun: PlacedBodyConfig,
    pub satellite: SatelliteConfig,
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub accelerations: AccelerationConfig,
}

/// Canvas size and viewport transform used when none is given on the command line.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub scale_px_per_m: f64,
    pub zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale_px_per_m: 2.0e-5,
            zoom: 1.0,
        }
    }
}

/// Which perturbation overlays are enabled.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct EffectsConfig {
    pub lunar: bool,
    pub solar: bool,
    pub drag: bool,
    pub j2: bool,
    pub srp: bool,
}

/// Appearance of a body.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub radius_km: f64,
    pub color: Color,
    #[serde(default)]
    pub outline_color: Option<Color>,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

/// A body with a position relative to the central body.
#[derive(Debug, Deserialize, Clone)]
pub struct PlacedBodyConfig {
    #[serde(flatten)]
    pub body: BodyConfig,
    pub position_km: [f64; 3],
}

/// Satellite state and appearance.
#[derive(Debug, Deserialize, Clone)]
pub struct SatelliteConfig {
    pub name: String,
    pub position_km: [f64; 3],
    #[serde(default)]
    pub velocity_km_s: [f64; 3],
    #[serde(default = "default_satellite_size")]
    pub size_px: f64,
    #[serde(default = "default_satellite_color")]
    pub color: Color,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

fn default_satellite_size() -> f64 {
    6.0
}

fn default_satellite_color() -> Color {
    Color(220, 220, 220)
}

/// Static orbit ellipse parameters.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct OrbitConfig {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
}

/// Precomputed per-effect accelerations (m/s²) from an external simulation.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct AccelerationConfig {
    pub lunar_m_s2: [f64; 3],
    pub solar_m_s2: [f64; 3],
    pub drag_m_s2: [f64; 3],
    pub j2_m_s2: [f64; 3],
    pub srp_m_s2: [f64; 3],
    pub shadow: ShadowConfig,
}

/// Shadow state of the satellite as reported by the simulation.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShadowConfig {
    #[default]
    DirectSunlight,
    Penumbra,
    Umbral,
}

/// Colors used for the perturbation overlays and annotations.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub orbit: Color,
    pub label: Color,
    pub lunar: Color,
    pub solar: Color,
    pub drag: Color,
    pub j2: Color,
    pub srp_direct: Color,
    pub srp_penumbra: Color,
    pub srp_umbral: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color(8, 10, 24),
            orbit: Color(90, 110, 150),
            label: Color::WHITE,
            lunar: Color(170, 170, 255),
            solar: Color(255, 220, 60),
            drag: Color(255, 80, 80),
            j2: Color(80, 220, 120),
            srp_direct: Color::ORANGE,
            srp_penumbra: Color(190, 120, 40),
            srp_umbral: Color(90, 70, 50),
        }
    }
}

/// Arrow layout constants.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ArrowSettings {
    /// Arrow length (px) for a magnitude equal to `threshold_m_s2`.
    pub base_length_px: f64,
    /// Extra length (px) per decade of magnitude above the threshold.
    pub decade_length_px: f64,
    pub threshold_m_s2: f64,
    pub min_length_px: f64,
    pub max_length_px: f64,
    /// Arrowhead length as a fraction of the smaller canvas dimension.
    pub head_fraction: f64,
    /// Arrowhead half-angle in radians.
    pub head_angle_rad: f64,
    pub stroke_width: u32,
}

impl Default for ArrowSettings {
    fn default() -> Self {
        Self {
            base_length_px: 40.0,
            decade_length_px: 10.0,
            threshold_m_s2: 1.0e-10,
            min_length_px: 12.0,
            max_length_px: 150.0,
            head_fraction: 0.015,
            head_angle_rad: PI / 7.0,
            stroke_width: 2,
        }
    }
}

/// All renderer tunables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    /// Bodies smaller than this on screen are drawn with this icon radius instead.
    pub min_body_radius_px: f64,
    /// Images are only blitted when their on-screen diameter exceeds this.
    pub min_image_px: f64,
    /// Visual moon distance in central-body radii (not to scale).
    pub moon_visual_orbit_radii: f64,
    /// Sun distance from the center as a fraction of half the smaller canvas side.
    pub sun_visual_fraction: f64,
    pub max_sun_radius_px: f64,
    pub orbit_segments: usize,
    pub label_offset_px: f64,
    pub line_height_px: f64,
    pub font_size_px: f64,
    pub show_legend: bool,
    /// Fallback moon image, loaded once if the moon carries none.
    pub moon_image_path: Option<PathBuf>,
    pub arrow: ArrowSettings,
    pub palette: Palette,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            min_body_radius_px: 4.0,
            min_image_px: 12.0,
            moon_visual_orbit_radii: 2.2,
            sun_visual_fraction: 0.85,
            max_sun_radius_px: 18.0,
            orbit_segments: 180,
            label_offset_px: 8.0,
            line_height_px: 14.0,
            font_size_px: 13.0,
            show_legend: true,
            moon_image_path: None,
            arrow: ArrowSettings::default(),
            palette: Palette::default(),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid scenario '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Load a scenario from a YAML or TOML file (chosen by extension) and validate it.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let scenario: ScenarioConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    scenario.validate()?;
    Ok(scenario)
}

impl ScenarioConfig {
    /// Reject values the renderer cannot draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if !(self.view.scale_px_per_m.is_finite() && self.view.scale_px_per_m > 0.0) {
            return Err(invalid("view.scale_px_per_m must be positive"));
        }
        if !(self.view.zoom.is_finite() && self.view.zoom > 0.0) {
            return Err(invalid("view.zoom must be positive"));
        }
        if self.view.width == 0 || self.view.height == 0 {
            return Err(invalid("view dimensions must be non-zero"));
        }
        if !(0.0..1.0).contains(&self.orbit.eccentricity) {
            return Err(invalid("orbit.eccentricity must lie in [0, 1)"));
        }
        if self.central_body.radius_km <= 0.0 {
            return Err(invalid("central_body.radius_km must be positive"));
        }
        self.settings.arrow.check().map_err(invalid)
    }
}

impl ArrowSettings {
    /// Describe the first setting that would break arrow layout, if any.
    pub fn check(&self) -> Result<(), &'static str> {
        if !(self.threshold_m_s2.is_finite() && self.threshold_m_s2 > 0.0) {
            return Err("settings.arrow.threshold_m_s2 must be positive");
        }
        if !(self.base_length_px.is_finite() && self.decade_length_px.is_finite()) {
            return Err("settings.arrow base/decade lengths must be finite");
        }
        if !(self.min_length_px.is_finite() && self.min_length_px >= 0.0) {
            return Err("settings.arrow.min_length_px must be non-negative");
        }
        if !(self.max_length_px.is_finite() && self.max_length_px >= self.min_length_px) {
            return Err("settings.arrow.max_length_px must be at least min_length_px");
        }
        Ok(())
    }
}
