//! Frame renderer: paints one simulation snapshot onto a [`Canvas`].
//!
//! Layers are painted back to front: orbit ellipse, central body, moon, sun,
//! satellite, perturbation vectors, legend.

mod bodies;
mod legend;
pub mod vectors;

use std::cell::OnceCell;

use orbit_view_config::RenderSettings;
use thiserror::Error;

use crate::assets;
use crate::canvas::{Canvas, CanvasError};
use crate::scene::{RasterImage, Simulation, Viewport};
use vectors::Frame;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("viewport scale must be positive and finite (got {0})")]
    InvalidScale(f64),
    #[error("zoom factor must be positive and finite (got {0})")]
    InvalidZoom(f64),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Renders frames of a borrowed simulation.
pub struct Renderer<'a, S: Simulation> {
    simulation: &'a S,
    settings: &'a RenderSettings,
    fallback_moon: OnceCell<Option<RasterImage>>,
}

impl<'a, S: Simulation> Renderer<'a, S> {
    pub fn new(simulation: &'a S, settings: &'a RenderSettings) -> Self {
        Self {
            simulation,
            settings,
            fallback_moon: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        self.settings
    }

    /// Draw one frame with the central body at `(center_x, center_y)`.
    ///
    /// `scale` converts model metres to pixels and `zoom_factor` multiplies it.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        center_x: f64,
        center_y: f64,
        scale: f64,
        zoom_factor: f64,
    ) -> Result<(), RenderError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidScale(scale));
        }
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return Err(RenderError::InvalidZoom(zoom_factor));
        }
        let viewport = Viewport::new(center_x, center_y, scale, zoom_factor);
        let sim = self.simulation;
        log::debug!(
            "rendering frame at ({center_x:.1}, {center_y:.1}) with {:.3e} px/m, effects {:?}",
            viewport.pixels_per_metre(),
            sim.effects()
        );

        bodies::draw_orbit(canvas, &viewport, sim.orbit(), self.settings)?;
        bodies::draw_central_body(canvas, &viewport, sim.central_body(), self.settings)?;
        let moon = sim.moon();
        let moon_image = moon.body.image.as_ref().or_else(|| self.fallback_moon());
        bodies::draw_moon(
            canvas,
            &viewport,
            moon,
            moon_image,
            sim.central_body().radius_m,
            self.settings,
        )?;
        bodies::draw_sun(canvas, &viewport, sim.sun(), self.settings)?;
        bodies::draw_satellite(canvas, &viewport, sim.satellite(), self.settings)?;

        self.draw_perturbations(canvas, &viewport)?;

        if self.settings.show_legend {
            let effects = sim.effects();
            let shadow = effects
                .srp
                .then(|| sim.shadow_condition(sim.satellite()));
            legend::draw_legend(canvas, effects, shadow, self.settings)?;
        }
        Ok(())
    }

    fn draw_perturbations<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        viewport: &Viewport,
    ) -> Result<(), RenderError> {
        let sim = self.simulation;
        let effects = sim.effects();
        if !effects.any() {
            return Ok(());
        }
        let satellite = sim.satellite();
        let frame = Frame {
            canvas: canvas.size(),
            origin: viewport.to_screen(&satellite.position_m),
            settings: self.settings,
        };

        if effects.lunar || effects.solar {
            let lunar = effects.lunar.then(|| sim.lunar_acceleration(satellite));
            let solar = effects.solar.then(|| sim.solar_acceleration(satellite));
            vectors::draw_annotation(canvas, &frame.gravity(lunar, solar), self.settings)?;
        }
        if effects.drag {
            let drag = sim.drag_acceleration(satellite);
            vectors::draw_annotation(canvas, &frame.drag(&drag), self.settings)?;
        }
        if effects.j2 {
            let j2 = sim.j2_acceleration(satellite);
            vectors::draw_annotation(
                canvas,
                &frame.j2(&satellite.position_m, &j2),
                self.settings,
            )?;
        }
        if effects.srp {
            let srp = sim.srp_acceleration(satellite);
            let shadow = sim.shadow_condition(satellite);
            let annotation = frame.srp(&satellite.position_m, &sim.sun().position_m, &srp, shadow);
            vectors::draw_annotation(canvas, &annotation, self.settings)?;
        }
        Ok(())
    }

    fn fallback_moon(&self) -> Option<&RasterImage> {
        self.fallback_moon
            .get_or_init(|| {
                self.settings
                    .moon_image_path
                    .as_deref()
                    .and_then(assets::load_optional)
            })
            .as_ref()
    }
}
