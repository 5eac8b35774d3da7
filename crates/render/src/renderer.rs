//! Watch face renderer
//!
//! Caches the layout and paints for the current screen and draws one frame
//! per call: hour indicators, the golden emblem (interactive only) and the
//! arc running from the hour hand to the minute hand.

use hoodie_types::{FaceConfig, WatchMode, WatchShape};

use crate::bitmap::Bitmap;
use crate::canvas::{Canvas, Paint};
use crate::error::{RenderError, Result};
use crate::geometry::{FaceLayout, TimeArc};

/// Source images of the face
#[derive(Debug, Clone)]
pub struct FaceAssets {
    /// Fill texture for the emblem and the interactive strokes
    pub texture: Bitmap,
    /// Silhouette of the emblem, only its alpha channel is used
    pub emblem: Bitmap,
}

/// Paints used in one display mode
#[derive(Debug, Clone)]
pub struct ModeStyles {
    pub indicators: Paint,
    pub time_arc: Paint,
}

#[derive(Debug, Clone)]
struct Geometry {
    layout: FaceLayout,
    emblem: Option<Bitmap>,
}

pub struct WatchFaceRenderer {
    config: FaceConfig,
    assets: FaceAssets,
    interactive: ModeStyles,
    ambient: ModeStyles,
    mode: WatchMode,
    geometry: Option<Geometry>,
    layout_generation: u64,
}

impl WatchFaceRenderer {
    pub fn new(config: FaceConfig, assets: FaceAssets) -> Self {
        let interactive = ModeStyles {
            indicators: Paint::stroke(config.interactive_color, config.indicators_width),
            time_arc: Paint::stroke(config.interactive_color, config.timearc_stroke_width),
        };
        let ambient = ModeStyles {
            indicators: Paint::stroke(config.ambient_color, config.indicators_width_ambient),
            time_arc: Paint::stroke(config.ambient_color, config.ambient_arc_width()),
        };

        Self {
            config,
            assets,
            interactive,
            ambient,
            mode: WatchMode::Interactive,
            geometry: None,
            layout_generation: 0,
        }
    }

    /// Update the screen geometry.
    ///
    /// The layout, textures and emblem are rebuilt only when the dial center moves
    /// by more than half a pixel. Returns whether a rebuild happened.
    pub fn resize(
        &mut self,
        width: i32,
        height: i32,
        chin_size: i32,
        shape: WatchShape,
    ) -> Result<bool> {
        let center = FaceLayout::center_for(width, height, chin_size);
        if let Some(geometry) = &self.geometry {
            if !center.moved_from(&geometry.layout.center) {
                return Ok(false);
            }
        }

        let layout = FaceLayout::compute(width, height, chin_size, shape, &self.config);
        if layout.diameter <= 0 {
            return Err(RenderError::InvalidSize {
                width,
                height: height + chin_size,
            });
        }

        let side = layout.diameter;
        let texture = self.assets.texture.stretched(side, side)?;

        let emblem_side = side - (2.0 * layout.emblem_margin).round() as i32;
        let emblem = if emblem_side > 0 {
            let silhouette = self.assets.emblem.stretched(emblem_side, emblem_side)?;
            Some(texture.masked_by(&silhouette, layout.emblem_margin, layout.emblem_margin)?)
        } else {
            log::debug!(
                "Emblem margin {} leaves no room on a {}px face, skipping emblem",
                layout.emblem_margin,
                side
            );
            None
        };

        self.interactive.indicators.shader = Some(texture.clone());
        self.interactive.time_arc.shader = Some(texture);

        log::debug!(
            "Face layout rebuilt: {}x{} chin={} shape={:?} center=({}, {}) diameter={}",
            width,
            height,
            chin_size,
            shape,
            layout.center.x,
            layout.center.y,
            side
        );

        self.geometry = Some(Geometry { layout, emblem });
        self.layout_generation += 1;
        Ok(true)
    }

    /// Switch between interactive and ambient paints.
    ///
    /// Low-bit ambient screens cannot show intermediate shades, so anti-aliasing
    /// is turned off for the ambient paints in that mode.
    pub fn set_mode(&mut self, mode: WatchMode) {
        let anti_alias = mode.anti_alias();
        self.ambient.indicators.anti_alias = anti_alias;
        self.ambient.time_arc.anti_alias = anti_alias;

        if mode != self.mode {
            log::debug!("Watch mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Draw one frame. Rotations are in degrees, clockwise from 12 o'clock.
    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        hours_rotation: f64,
        minutes_rotation: f64,
    ) -> std::result::Result<(), C::Error> {
        canvas.clear()?;

        let Some(geometry) = &self.geometry else {
            return Ok(());
        };
        let styles = self.styles();

        canvas.stroke_path(&geometry.layout.indicators, &styles.indicators)?;

        if self.mode.is_interactive() {
            if let Some(emblem) = &geometry.emblem {
                let margin = geometry.layout.emblem_margin;
                canvas.draw_bitmap(emblem, margin, margin)?;
            }
        }

        let arc = TimeArc::from_rotations(hours_rotation, minutes_rotation);
        canvas.stroke_arc(&geometry.layout.arc_bounds, &arc, &styles.time_arc)?;

        Ok(())
    }

    pub fn mode(&self) -> WatchMode {
        self.mode
    }

    /// Paints of the current mode
    pub fn styles(&self) -> &ModeStyles {
        if self.mode.is_interactive() {
            &self.interactive
        } else {
            &self.ambient
        }
    }

    pub fn layout(&self) -> Option<&FaceLayout> {
        self.geometry.as_ref().map(|geometry| &geometry.layout)
    }

    pub fn emblem(&self) -> Option<&Bitmap> {
        self.geometry.as_ref().and_then(|geometry| geometry.emblem.as_ref())
    }

    /// Number of times the layout has been rebuilt
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }
}
