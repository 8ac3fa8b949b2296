//! Layout of the perturbation arrows and their labels.

use orbit_view_config::RenderSettings;
use orbit_view_core::vector::{self, Vector3};
use orbit_view_orbits::{latitude_deg, radial_tangential};

use crate::Color;
use crate::annotation::{
    ArrowLayout, VectorAnnotation, away_label, components_label, hemisphere_label, lit_label,
    magnitude_label,
};
use crate::canvas::{Canvas, CanvasError, Point};
use crate::geometry::{
    arrow_head, arrow_length, head_length, label_align, label_origin, offset_along,
    screen_direction,
};
use crate::palette::{GravitySource, shadow_color};
use crate::scene::ShadowCondition;

/// Everything needed to lay out arrows rooted at the satellite.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'s> {
    /// Canvas size in pixels.
    pub canvas: (u32, u32),
    /// Satellite screen position; every arrow starts here.
    pub origin: Point,
    pub settings: &'s RenderSettings,
}

impl Frame<'_> {
    /// Arrow along `acceleration` (or `fallback_dir` when it has no on-screen
    /// component) with the label block at its tip. Zero or non-finite vectors
    /// only get the label, anchored at the satellite.
    pub fn annotate(
        &self,
        acceleration: &Vector3,
        fallback_dir: Option<Point>,
        color: Color,
        lines: Vec<String>,
    ) -> VectorAnnotation {
        let arrow_cfg = &self.settings.arrow;
        let magnitude = vector::norm(acceleration);
        let align = label_align(self.origin.0, self.canvas.0);
        let dir = if magnitude.is_finite() && magnitude > 0.0 {
            screen_direction(acceleration).or(fallback_dir)
        } else {
            None
        };

        let arrow = dir.map(|dir| {
            let length = arrow_length(magnitude, arrow_cfg);
            let end = offset_along(self.origin, dir, length);
            let barb = head_length(length, self.canvas, arrow_cfg);
            ArrowLayout {
                start: self.origin,
                end,
                barbs: arrow_head(end, dir, barb, arrow_cfg.head_angle_rad),
                length,
            }
        });
        let tip = arrow.as_ref().map(|a| a.end).unwrap_or(self.origin);

        VectorAnnotation {
            arrow,
            color,
            lines,
            anchor: label_origin(tip, align, self.settings.label_offset_px),
            align,
        }
    }

    /// Lunar and/or solar third-body gravity. With both present the arrow is
    /// their sum, colored and named after the larger contributor.
    pub fn gravity(&self, lunar: Option<Vector3>, solar: Option<Vector3>) -> VectorAnnotation {
        let lunar = lunar.unwrap_or(vector::ZERO);
        let solar = solar.unwrap_or(vector::ZERO);
        let combined = vector::add(&lunar, &solar);
        let source = GravitySource::dominant(vector::norm(&lunar), vector::norm(&solar));
        self.annotate(
            &combined,
            None,
            source.color(&self.settings.palette),
            vec![magnitude_label(source.label(), vector::norm(&combined))],
        )
    }

    pub fn drag(&self, drag: &Vector3) -> VectorAnnotation {
        self.annotate(
            drag,
            None,
            self.settings.palette.drag,
            vec![magnitude_label("Drag", vector::norm(drag))],
        )
    }

    /// J2 arrow with radial/tangential split and hemisphere hint.
    pub fn j2(&self, position: &Vector3, j2: &Vector3) -> VectorAnnotation {
        let (radial, tangential) = radial_tangential(position, j2);
        let latitude = latitude_deg(position);
        self.annotate(
            j2,
            None,
            self.settings.palette.j2,
            vec![
                magnitude_label("J2", vector::norm(j2)),
                components_label(radial, tangential),
                hemisphere_label(latitude),
            ],
        )
    }

    /// SRP arrow colored by shadow state. Without an on-screen SRP component
    /// the arrow falls back to the away-from-sun direction (sun→satellite).
    pub fn srp(
        &self,
        position: &Vector3,
        sun_position: &Vector3,
        srp: &Vector3,
        shadow: ShadowCondition,
    ) -> VectorAnnotation {
        let away = vector::unit(&vector::sub(position, sun_position)).unwrap_or(vector::ZERO);
        self.annotate(
            srp,
            screen_direction(&away),
            shadow_color(shadow, &self.settings.palette),
            vec![
                magnitude_label("SRP", vector::norm(srp)),
                lit_label(shadow),
                away_label((away[0], away[1])),
            ],
        )
    }
}

/// Paint an annotation: shaft, both barbs, then one text run per label line.
pub fn draw_annotation<C: Canvas + ?Sized>(
    canvas: &mut C,
    annotation: &VectorAnnotation,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let width = settings.arrow.stroke_width;
    if let Some(arrow) = &annotation.arrow {
        canvas.line(arrow.start, arrow.end, annotation.color, width)?;
        for (from, to) in arrow.barbs {
            canvas.line(from, to, annotation.color, width)?;
        }
    }
    for (row, line) in annotation.lines.iter().enumerate() {
        let at = (
            annotation.anchor.0,
            annotation.anchor.1 + row as f64 * settings.line_height_px,
        );
        canvas.text(
            line,
            at,
            annotation.align,
            settings.font_size_px,
            annotation.color,
        )?;
    }
    Ok(())
}
