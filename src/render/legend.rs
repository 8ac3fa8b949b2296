use orbit_view_config::RenderSettings;

use crate::canvas::{Canvas, CanvasError, HAlign};
use crate::palette::shadow_color;
use crate::scene::{EffectFlags, ShadowCondition};

const MARGIN_PX: f64 = 10.0;
const SWATCH_PX: f64 = 18.0;

/// Top-left key of the enabled overlays. `shadow` is only known when SRP is on.
pub(super) fn draw_legend<C: Canvas + ?Sized>(
    canvas: &mut C,
    effects: EffectFlags,
    shadow: Option<ShadowCondition>,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let palette = &settings.palette;
    let mut entries = Vec::new();
    if effects.lunar {
        entries.push(("Lunar gravity".to_string(), palette.lunar));
    }
    if effects.solar {
        entries.push(("Solar gravity".to_string(), palette.solar));
    }
    if effects.drag {
        entries.push(("Drag".to_string(), palette.drag));
    }
    if effects.j2 {
        entries.push(("J2".to_string(), palette.j2));
    }
    if let Some(shadow) = shadow.filter(|_| effects.srp) {
        entries.push((
            format!("SRP ({})", shadow.label()),
            shadow_color(shadow, palette),
        ));
    }

    for (row, (label, color)) in entries.iter().enumerate() {
        let y = MARGIN_PX + settings.line_height_px * (row as f64 + 0.5);
        canvas.line(
            (MARGIN_PX, y),
            (MARGIN_PX + SWATCH_PX, y),
            *color,
            settings.arrow.stroke_width,
        )?;
        canvas.text(
            label,
            (MARGIN_PX + SWATCH_PX + 6.0, y),
            HAlign::Left,
            settings.font_size_px,
            palette.label,
        )?;
    }
    Ok(())
}
