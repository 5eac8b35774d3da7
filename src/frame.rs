//! Rasterizing a single frame to an image

use anyhow::{Context, Result};
use hoodie_render::{Bitmap, CairoCanvas, WatchFaceRenderer};
use std::path::Path;

use crate::clock::HandRotations;

/// Render one frame onto a new transparent `width` x `height` bitmap
pub fn render_frame(
    renderer: &WatchFaceRenderer,
    width: i32,
    height: i32,
    rotations: HandRotations,
) -> Result<Bitmap> {
    let target = Bitmap::new(width, height)?;

    {
        let cr = cairo::Context::new(target.surface())?;
        let mut canvas = CairoCanvas::new(&cr);
        renderer.render(&mut canvas, rotations.hours, rotations.minutes)?;
    }

    Ok(target)
}

pub fn write_frame(frame: &Bitmap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    frame
        .write_png(&mut file)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    Ok(())
}
