//! 2D orbit visualisation with perturbation overlays.
//!
//! The renderer reads a read-only simulation snapshot through the
//! [`Simulation`] and [`PerturbationModel`] traits and paints bodies, the orbit
//! ellipse and labelled acceleration arrows onto any [`Canvas`]. Physics lives
//! outside this crate; the only numbers computed here are screen geometry.

pub mod annotation;
pub mod assets;
pub mod backend;
pub mod canvas;
pub mod geometry;
pub mod palette;
pub mod render;
pub mod scenario;
pub mod scene;

pub use canvas::{Canvas, CanvasError, DrawCommand, HAlign, Point, RecordingCanvas};
pub use orbit_view_config as config;
pub use orbit_view_config::{Color, RenderSettings};
pub use orbit_view_core::{constants, units, vector};
pub use orbit_view_export as export;
pub use orbit_view_orbits as orbits;
pub use render::{RenderError, Renderer};
pub use scenario::Snapshot;
pub use scene::{
    CelestialBody, EffectFlags, OrbitParameters, PerturbationModel, PlacedBody, RasterImage,
    Satellite, ShadowCondition, Simulation, Viewport,
};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
