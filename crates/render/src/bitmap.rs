//! ARGB32 bitmaps backed by Cairo image surfaces

use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use hoodie_types::{Color, LinearGradientConfig};

use crate::error::{RenderError, Result};

/// Shared handle to an image surface. Cloning is cheap, the pixels are reference counted.
#[derive(Clone)]
pub struct Bitmap {
    surface: cairo::ImageSurface,
}

impl Bitmap {
    /// Fully transparent bitmap
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    pub fn from_surface(surface: cairo::ImageSurface) -> Self {
        Self { surface }
    }

    pub fn load_png(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path)?;
        Self::from_png_reader(&mut file)
    }

    pub fn from_png_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let surface = cairo::ImageSurface::create_from_png(reader)?;
        Ok(Self { surface })
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Copy scaled to exactly `width` x `height`, ignoring the aspect ratio
    pub fn stretched(&self, width: i32, height: i32) -> Result<Bitmap> {
        let target = Bitmap::new(width, height)?;
        let src_width = self.width().max(1) as f64;
        let src_height = self.height().max(1) as f64;

        {
            let cr = cairo::Context::new(&target.surface)?;
            cr.scale(width as f64 / src_width, height as f64 / src_height);
            cr.set_source_surface(&self.surface, 0.0, 0.0)?;
            // Keep the edges opaque when upscaling
            cr.source().set_extend(cairo::Extend::Pad);
            cr.paint()?;
        }

        Ok(target)
    }

    /// Cut the region of `self` starting at (`offset_x`, `offset_y`) with the size of `mask`,
    /// keeping only the pixels where `mask` is opaque
    pub fn masked_by(&self, mask: &Bitmap, offset_x: f64, offset_y: f64) -> Result<Bitmap> {
        let target = Bitmap::new(mask.width(), mask.height())?;

        {
            let cr = cairo::Context::new(&target.surface)?;
            cr.set_source_surface(&self.surface, -offset_x, -offset_y)?;
            cr.paint()?;

            cr.set_operator(cairo::Operator::DestIn);
            cr.set_source_surface(&mask.surface, 0.0, 0.0)?;
            cr.paint()?;
        }

        Ok(target)
    }

    /// Bitmap filled with a linear gradient
    pub fn linear_gradient(width: i32, height: i32, config: &LinearGradientConfig) -> Result<Self> {
        let bitmap = Bitmap::new(width, height)?;
        let (width, height) = (width as f64, height as f64);

        {
            let cr = cairo::Context::new(&bitmap.surface)?;
            let angle_rad = config.angle.to_radians();
            let diagonal = (width * width + height * height).sqrt();
            let x1 = width / 2.0 - diagonal * angle_rad.cos() / 2.0;
            let y1 = height / 2.0 - diagonal * angle_rad.sin() / 2.0;
            let x2 = width / 2.0 + diagonal * angle_rad.cos() / 2.0;
            let y2 = height / 2.0 + diagonal * angle_rad.sin() / 2.0;

            let pattern = cairo::LinearGradient::new(x1, y1, x2, y2);
            for stop in &config.stops {
                pattern.add_color_stop_rgba(
                    stop.position,
                    stop.color.r,
                    stop.color.g,
                    stop.color.b,
                    stop.color.a,
                );
            }

            cr.set_source(&pattern)?;
            cr.rectangle(0.0, 0.0, width, height);
            cr.fill()?;
        }

        Ok(bitmap)
    }

    /// Filled circle inscribed in a `size` x `size` bitmap
    pub fn disc(size: i32, color: Color) -> Result<Self> {
        let bitmap = Bitmap::new(size, size)?;
        let radius = size as f64 / 2.0;

        {
            let cr = cairo::Context::new(&bitmap.surface)?;
            color.apply_to_cairo(&cr);
            cr.arc(radius, radius, radius, 0.0, 2.0 * std::f64::consts::PI);
            cr.fill()?;
        }

        Ok(bitmap)
    }

    /// Alpha of the pixel at (x, y), `None` outside the bitmap
    pub fn alpha_at(&self, x: i32, y: i32) -> Result<Option<u8>> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut alpha = None;
        self.surface.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                let pixel = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                alpha = Some((pixel >> 24) as u8);
            }
        })?;

        Ok(alpha)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
