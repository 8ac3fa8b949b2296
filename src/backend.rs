//! `plotters` bitmap implementation of [`Canvas`].

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, DrawingArea, DrawingBackend, FontDesc, FontFamily, FontStyle,
    IntoDrawingArea, PathElement, RGBAColor, RGBColor, Rectangle, ShapeStyle, Text,
};
use plotters::style::Color as _;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::canvas::{Canvas, CanvasError, HAlign, Point};
use crate::render::{RenderError, Renderer};
use crate::scene::{RasterImage, Simulation};

fn rgb(color: crate::Color) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn px(point: Point) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

fn backend_error(err: impl std::fmt::Display) -> CanvasError {
    CanvasError::Backend(err.to_string())
}

/// Platform default sans-serif family.
pub fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Canvas over a `plotters` drawing area.
pub struct PlottersCanvas<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    font: FontFamily<'static>,
}

impl<DB: DrawingBackend> PlottersCanvas<DB> {
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        Self {
            area,
            font: select_font_family(),
        }
    }

    /// Paint the whole area with `color`.
    pub fn clear(&mut self, color: crate::Color) -> Result<(), CanvasError> {
        self.area.fill(&rgb(color)).map_err(backend_error)
    }

    /// Flush pending drawing to the backend.
    pub fn present(&self) -> Result<(), CanvasError> {
        self.area.present().map_err(backend_error)
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<DB> {
    fn size(&self) -> (u32, u32) {
        self.area.dim_in_pixel()
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: crate::Color,
    ) -> Result<(), CanvasError> {
        let r = radius.round().max(1.0) as i32;
        self.area
            .draw(&Circle::new(px(center), r, rgb(color).filled()))
            .map_err(backend_error)
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: crate::Color,
    ) -> Result<(), CanvasError> {
        let r = radius.round().max(1.0) as i32;
        self.area
            .draw(&Circle::new(
                px(center),
                r,
                ShapeStyle::from(&rgb(color)).stroke_width(1),
            ))
            .map_err(backend_error)
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: crate::Color,
        width: u32,
    ) -> Result<(), CanvasError> {
        self.area
            .draw(&PathElement::new(
                vec![px(from), px(to)],
                ShapeStyle::from(&rgb(color)).stroke_width(width),
            ))
            .map_err(backend_error)
    }

    fn polyline(&mut self, points: &[Point], color: crate::Color) -> Result<(), CanvasError> {
        if points.len() < 2 {
            return Ok(());
        }
        let path: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        self.area
            .draw(&PathElement::new(
                path,
                ShapeStyle::from(&rgb(color)).stroke_width(1),
            ))
            .map_err(backend_error)
    }

    fn text(
        &mut self,
        text: &str,
        at: Point,
        align: HAlign,
        size_px: f64,
        color: crate::Color,
    ) -> Result<(), CanvasError> {
        let h = match align {
            HAlign::Left => HPos::Left,
            HAlign::Right => HPos::Right,
        };
        let style = FontDesc::new(self.font, size_px, FontStyle::Normal)
            .color(&rgb(color))
            .pos(Pos::new(h, VPos::Center));
        // Missing system fonts must not cost the whole frame.
        if let Err(err) = self
            .area
            .draw(&Text::new(text.to_string(), px(at), style))
        {
            log::warn!("skipping label '{text}': {err}");
        }
        Ok(())
    }

    fn image(
        &mut self,
        image: &RasterImage,
        center: Point,
        diameter_px: f64,
    ) -> Result<(), CanvasError> {
        if !(diameter_px.is_finite() && diameter_px > 0.0) {
            return Ok(());
        }
        let (canvas_w, canvas_h) = self.area.dim_in_pixel();
        let longest = image.width.max(image.height) as f64;
        let factor = diameter_px / longest;
        let w = (image.width as f64 * factor).round().max(1.0) as i32;
        let h = (image.height as f64 * factor).round().max(1.0) as i32;
        let (cx, cy) = px(center);
        let (x0, y0) = (cx - w / 2, cy - h / 2);

        // Source column for every on-canvas destination column.
        let columns: Vec<(i32, u32)> = (0..w)
            .map(|dx| (x0 + dx, (dx as f64 / factor) as u32))
            .filter(|(x, _)| (0..canvas_w as i32).contains(x))
            .collect();
        for dy in 0..h {
            let y = y0 + dy;
            if !(0..canvas_h as i32).contains(&y) {
                continue;
            }
            let sy = (dy as f64 / factor) as u32;
            let mut run: Option<(i32, i32, [u8; 4])> = None;
            for &(x, sx) in &columns {
                let rgba = image.pixel(sx, sy);
                run = match run {
                    Some((start, _, current)) if current == rgba => Some((start, x, current)),
                    previous => {
                        if let Some(span) = previous {
                            self.fill_span(y, span)?;
                        }
                        Some((x, x, rgba))
                    }
                };
            }
            if let Some(span) = run {
                self.fill_span(y, span)?;
            }
        }
        Ok(())
    }
}

impl<DB: DrawingBackend> PlottersCanvas<DB> {
    /// One horizontal run of identical sprite pixels on row `y`.
    fn fill_span(
        &self,
        y: i32,
        (start, end, rgba): (i32, i32, [u8; 4]),
    ) -> Result<(), CanvasError> {
        let [r, g, b, a] = rgba;
        if a == 0 {
            return Ok(());
        }
        let color = RGBAColor(r, g, b, a as f64 / 255.0);
        if start == end {
            return self
                .area
                .draw_pixel((start, y), &color)
                .map_err(backend_error);
        }
        self.area
            .draw(&Rectangle::new([(start, y), (end, y)], color.filled()))
            .map_err(backend_error)
    }
}

/// Render one frame of `simulation` to a PNG at `path`, centered on the canvas.
pub fn render_png<S: Simulation>(
    renderer: &Renderer<'_, S>,
    path: &Path,
    size: (u32, u32),
    scale: f64,
    zoom: f64,
) -> Result<(), RenderError> {
    let area = BitMapBackend::new(path, size).into_drawing_area();
    let mut canvas = PlottersCanvas::new(area);
    canvas.clear(renderer.settings().palette.background)?;
    renderer.render(
        &mut canvas,
        size.0 as f64 / 2.0,
        size.1 as f64 / 2.0,
        scale,
        zoom,
    )?;
    canvas.present()?;
    Ok(())
}
