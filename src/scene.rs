//! Per-frame snapshot types and the collaborator traits the renderer reads from.

use orbit_view_core::vector::Vector3;

use crate::Color;
use crate::canvas::Point;

/// Decoded RGBA raster used for body and satellite sprites.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 4]>,
}

impl RasterImage {
    /// Build from packed RGBA bytes. Returns `None` if the buffer length does not
    /// match the dimensions or either dimension is zero.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Solid-color image, mostly useful in tests. `None` if either dimension is zero.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
        })
    }

    /// RGBA value at `(x, y)`; out-of-range coordinates are clamped to the edge.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }
}

/// Viewport transform from model metres to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Point,
    pub scale: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, scale: f64, zoom: f64) -> Self {
        Self {
            center: (center_x, center_y),
            scale,
            zoom,
        }
    }

    /// Effective pixels per metre.
    #[inline]
    pub fn pixels_per_metre(&self) -> f64 {
        self.scale * self.zoom
    }

    /// Project a model position onto the canvas, dropping z. Model +y is screen up.
    pub fn to_screen(&self, position: &Vector3) -> Point {
        let s = self.pixels_per_metre();
        (
            self.center.0 + position[0] * s,
            self.center.1 - position[1] * s,
        )
    }
}

/// A body drawn as a disk or sprite.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub radius_m: f64,
    pub color: Color,
    pub outline_color: Color,
    pub image: Option<RasterImage>,
}

/// A body placed relative to the central body (moon, sun).
#[derive(Debug, Clone)]
pub struct PlacedBody {
    pub body: CelestialBody,
    pub position_m: Vector3,
}

/// Satellite state and appearance for one frame.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub name: String,
    pub position_m: Vector3,
    pub velocity_m_s: Vector3,
    pub size_px: f64,
    pub color: Color,
    pub image: Option<RasterImage>,
}

/// Static orbit ellipse parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
}

/// Which perturbation overlays the simulation has switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectFlags {
    pub lunar: bool,
    pub solar: bool,
    pub drag: bool,
    pub j2: bool,
    pub srp: bool,
}

impl EffectFlags {
    pub const ALL: Self = Self {
        lunar: true,
        solar: true,
        drag: true,
        j2: true,
        srp: true,
    };

    pub fn any(&self) -> bool {
        self.lunar || self.solar || self.drag || self.j2 || self.srp
    }
}

/// Illumination of the satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowCondition {
    DirectSunlight,
    Penumbra,
    Umbral,
}

impl ShadowCondition {
    /// Fraction of full sunlight reaching the satellite.
    pub const fn lighting_factor(self) -> f64 {
        match self {
            ShadowCondition::DirectSunlight => 1.0,
            ShadowCondition::Penumbra => 0.5,
            ShadowCondition::Umbral => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShadowCondition::DirectSunlight => "direct sunlight",
            ShadowCondition::Penumbra => "penumbra",
            ShadowCondition::Umbral => "umbra",
        }
    }
}

/// Acceleration calculators. Implementations may compute on demand or return
/// values cached by the simulation step; the renderer only reads them.
pub trait PerturbationModel {
    fn lunar_acceleration(&self, satellite: &Satellite) -> Vector3;
    fn solar_acceleration(&self, satellite: &Satellite) -> Vector3;
    fn drag_acceleration(&self, satellite: &Satellite) -> Vector3;
    fn j2_acceleration(&self, satellite: &Satellite) -> Vector3;
    fn srp_acceleration(&self, satellite: &Satellite) -> Vector3;
    fn shadow_condition(&self, satellite: &Satellite) -> ShadowCondition;
}

/// Read-only view of the simulation state for one frame.
pub trait Simulation: PerturbationModel {
    fn effects(&self) -> EffectFlags;
    fn central_body(&self) -> &CelestialBody;
    fn moon(&self) -> &PlacedBody;
    fn sun(&self) -> &PlacedBody;
    fn satellite(&self) -> &Satellite;
    fn orbit(&self) -> OrbitParameters;
}
