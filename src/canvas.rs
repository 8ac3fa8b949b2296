//! Drawing-surface abstraction and an in-memory recording implementation.

use serde::Serialize;
use thiserror::Error;

use crate::Color;
use crate::scene::RasterImage;

/// Canvas coordinates in pixels, origin top-left, y down.
pub type Point = (f64, f64);

/// Horizontal anchor of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HAlign {
    /// Text starts at the anchor and extends right.
    Left,
    /// Text ends at the anchor.
    Right,
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

/// Minimal set of primitives the renderer paints with. Calls are layered in
/// order; later calls occlude earlier ones.
pub trait Canvas {
    /// Canvas size in pixels `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), CanvasError>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
    ) -> Result<(), CanvasError>;

    fn line(&mut self, from: Point, to: Point, color: Color, width: u32)
    -> Result<(), CanvasError>;

    fn polyline(&mut self, points: &[Point], color: Color) -> Result<(), CanvasError>;

    fn text(
        &mut self,
        text: &str,
        at: Point,
        align: HAlign,
        size_px: f64,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Blit `image` centered on `center`, scaled so its larger side is `diameter_px`.
    fn image(
        &mut self,
        image: &RasterImage,
        center: Point,
        diameter_px: f64,
    ) -> Result<(), CanvasError>;
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: u32,
    },
    Polyline {
        points: Vec<Point>,
        color: Color,
    },
    Text {
        text: String,
        at: Point,
        align: HAlign,
        color: Color,
    },
    Image {
        center: Point,
        diameter_px: f64,
        width: u32,
        height: u32,
    },
}

/// Canvas that records every primitive instead of rasterising it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// All recorded text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The text command whose content starts with `prefix`, if any.
    pub fn find_text(&self, prefix: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text.starts_with(prefix)))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: u32,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], color: Color) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        at: Point,
        align: HAlign,
        _size_px: f64,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            align,
            color,
        });
        Ok(())
    }

    fn image(
        &mut self,
        image: &RasterImage,
        center: Point,
        diameter_px: f64,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Image {
            center,
            diameter_px,
            width: image.width,
            height: image.height,
        });
        Ok(())
    }
}
