//! Color types used by the watch face paints and the procedural texture.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Color stop for gradients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub position: f64, // 0.0 to 1.0
    pub color: Color,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Linear gradient configuration
///
/// Used for the fallback gold texture when no texture image is configured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearGradientConfig {
    pub angle: f64, // Angle in degrees (0 = left to right, 90 = top to bottom)
    pub stops: Vec<ColorStop>,
}

impl LinearGradientConfig {
    /// Brushed gold, light in the top-left corner and darker towards the bottom-right
    pub fn gold() -> Self {
        Self {
            angle: 45.0,
            stops: vec![
                ColorStop::new(0.0, Color::from_rgba8(0xf9, 0xe2, 0x8c, 0xff)),
                ColorStop::new(0.35, Color::from_rgba8(0xd4, 0xaf, 0x37, 0xff)),
                ColorStop::new(0.6, Color::from_rgba8(0xf5, 0xd7, 0x6e, 0xff)),
                ColorStop::new(1.0, Color::from_rgba8(0x8a, 0x6e, 0x1f, 0xff)),
            ],
        }
    }
}

impl Default for LinearGradientConfig {
    fn default() -> Self {
        Self::gold()
    }
}
