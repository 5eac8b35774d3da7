//! Layout constants and stroke colors of the watch face
//!
//! All lengths are in screen pixels.

use serde::{Deserialize, Serialize};

use crate::color::{Color, LinearGradientConfig};

/// Watch face configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceConfig {
    // Hour indicators
    #[serde(default = "default_indicators_height")]
    pub indicators_height: f64,
    #[serde(default = "default_indicators_width")]
    pub indicators_width: f64,
    #[serde(default = "default_indicators_width_ambient")]
    pub indicators_width_ambient: f64,

    // Time arc
    #[serde(default = "default_timearc_margin")]
    pub timearc_margin: f64,
    #[serde(default = "default_timearc_stroke_width")]
    pub timearc_stroke_width: f64,
    #[serde(default = "default_timearc_stroke_width_ambient")]
    pub timearc_stroke_width_ambient: f64,

    /// Upper bound for any stroke drawn in ambient mode (burn-in protection)
    #[serde(default = "default_max_pixels_in_ambient_mode")]
    pub max_pixels_in_ambient_mode: f64,

    // Center emblem
    #[serde(default = "default_centerpic_margin")]
    pub centerpic_margin: f64,

    // Colors
    #[serde(default = "default_color")]
    pub interactive_color: Color,
    #[serde(default = "default_color")]
    pub ambient_color: Color,
    #[serde(default)]
    pub texture_gradient: LinearGradientConfig,
}

fn default_indicators_height() -> f64 {
    12.0
}

fn default_indicators_width() -> f64 {
    3.0
}

fn default_indicators_width_ambient() -> f64 {
    1.0
}

fn default_timearc_margin() -> f64 {
    6.0
}

fn default_timearc_stroke_width() -> f64 {
    6.0
}

fn default_timearc_stroke_width_ambient() -> f64 {
    3.0
}

fn default_max_pixels_in_ambient_mode() -> f64 {
    2.0
}

fn default_centerpic_margin() -> f64 {
    48.0
}

fn default_color() -> Color {
    Color::WHITE
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            indicators_height: default_indicators_height(),
            indicators_width: default_indicators_width(),
            indicators_width_ambient: default_indicators_width_ambient(),
            timearc_margin: default_timearc_margin(),
            timearc_stroke_width: default_timearc_stroke_width(),
            timearc_stroke_width_ambient: default_timearc_stroke_width_ambient(),
            max_pixels_in_ambient_mode: default_max_pixels_in_ambient_mode(),
            centerpic_margin: default_centerpic_margin(),
            interactive_color: default_color(),
            ambient_color: default_color(),
            texture_gradient: LinearGradientConfig::default(),
        }
    }
}

impl FaceConfig {
    /// Stroke width of the time arc in ambient mode, clamped to the ambient pixel budget
    pub fn ambient_arc_width(&self) -> f64 {
        self.timearc_stroke_width_ambient
            .min(self.max_pixels_in_ambient_mode)
    }

    /// Replace negative or non-finite lengths with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = FaceConfig::default();
        let fields: [(&str, &mut f64, f64); 8] = [
            ("indicators_height", &mut self.indicators_height, defaults.indicators_height),
            ("indicators_width", &mut self.indicators_width, defaults.indicators_width),
            (
                "indicators_width_ambient",
                &mut self.indicators_width_ambient,
                defaults.indicators_width_ambient,
            ),
            ("timearc_margin", &mut self.timearc_margin, defaults.timearc_margin),
            (
                "timearc_stroke_width",
                &mut self.timearc_stroke_width,
                defaults.timearc_stroke_width,
            ),
            (
                "timearc_stroke_width_ambient",
                &mut self.timearc_stroke_width_ambient,
                defaults.timearc_stroke_width_ambient,
            ),
            (
                "max_pixels_in_ambient_mode",
                &mut self.max_pixels_in_ambient_mode,
                defaults.max_pixels_in_ambient_mode,
            ),
            ("centerpic_margin", &mut self.centerpic_margin, defaults.centerpic_margin),
        ];

        for (name, value, default) in fields {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("FaceConfig: invalid {} ({}), using {}", name, value, default);
                *value = default;
            }
        }

        self
    }
}
