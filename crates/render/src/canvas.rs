//! Drawing surface abstraction used by the watch face renderer
//!
//! The renderer only needs four primitives. `CairoCanvas` rasterizes them,
//! `RecordingCanvas` keeps them as a list so frames can be inspected.

use std::convert::Infallible;

use hoodie_types::Color;

use crate::bitmap::Bitmap;
use crate::geometry::{IndicatorPath, Rect, Segment, TimeArc};

/// Stroke style
#[derive(Debug, Clone)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f64,
    pub anti_alias: bool,
    /// Texture used instead of `color` when set, clamped at its edges
    pub shader: Option<Bitmap>,
}

impl Paint {
    pub fn stroke(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
            anti_alias: true,
            shader: None,
        }
    }
}

pub trait Canvas {
    type Error;

    /// Reset every pixel to transparent
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn stroke_path(&mut self, path: &IndicatorPath, paint: &Paint) -> Result<(), Self::Error>;

    /// Stroke the part of the ellipse inscribed in `bounds` covered by `arc`
    fn stroke_arc(&mut self, bounds: &Rect, arc: &TimeArc, paint: &Paint)
        -> Result<(), Self::Error>;

    /// Draw `bitmap` with its top-left corner at (x, y)
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// One recorded drawing operation
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear,
    StrokePath {
        segments: Vec<Segment>,
        paint: Paint,
    },
    StrokeArc {
        bounds: Rect,
        arc: TimeArc,
        paint: Paint,
    },
    DrawBitmap {
        x: f64,
        y: f64,
        width: i32,
        height: i32,
    },
}

/// Canvas that stores commands instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the canvas empty for the next frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn bitmap_draws(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::DrawBitmap { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn stroke_path(&mut self, path: &IndicatorPath, paint: &Paint) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokePath {
            segments: path.segments().to_vec(),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn stroke_arc(&mut self, bounds: &Rect, arc: &TimeArc, paint: &Paint) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokeArc {
            bounds: *bounds,
            arc: *arc,
            paint: paint.clone(),
        });
        Ok(())
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: f64, y: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::DrawBitmap {
            x,
            y,
            width: bitmap.width(),
            height: bitmap.height(),
        });
        Ok(())
    }
}
