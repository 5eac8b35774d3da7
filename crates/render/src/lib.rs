//! hoodie-render: layout and Cairo rendering for the Hoodie watch face.

pub mod bitmap;
pub mod cairo_canvas;
pub mod canvas;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use bitmap::Bitmap;
pub use cairo_canvas::CairoCanvas;
pub use canvas::{Canvas, DrawCommand, Paint, RecordingCanvas};
pub use error::{RenderError, Result};
pub use geometry::{
    FaceLayout, IndicatorPath, Point, Rect, Segment, TimeArc, CENTER_CHANGE_THRESHOLD,
    INDICATOR_COUNT, MIN_SWEEP_ANGLE_DEG,
};
pub use renderer::{FaceAssets, ModeStyles, WatchFaceRenderer};
