//! Loading of the face's source images

use anyhow::{Context, Result};
use hoodie_render::{Bitmap, FaceAssets};
use hoodie_types::{Color, FaceConfig};
use log::{info, warn};
use std::path::Path;

use crate::config::AssetConfig;

/// Side of the procedural images. They are stretched to the screen anyway.
const FALLBACK_SIZE: i32 = 256;

/// Load the texture and emblem images.
///
/// Unset paths fall back to a gradient texture and a disc emblem; a path that
/// is set but cannot be read is an error.
pub fn load_assets(config: &AssetConfig, face: &FaceConfig) -> Result<FaceAssets> {
    let texture = match &config.texture {
        Some(path) => load_png(path, "texture")?,
        None => {
            warn!("No texture image configured, using built-in gradient");
            Bitmap::linear_gradient(FALLBACK_SIZE, FALLBACK_SIZE, &face.texture_gradient)?
        }
    };

    let emblem = match &config.emblem {
        Some(path) => load_png(path, "emblem")?,
        None => {
            warn!("No emblem image configured, using built-in disc");
            Bitmap::disc(FALLBACK_SIZE, Color::WHITE)?
        }
    };

    Ok(FaceAssets { texture, emblem })
}

fn load_png(path: &Path, what: &str) -> Result<Bitmap> {
    let bitmap = Bitmap::load_png(path)
        .with_context(|| format!("Failed to load {} image {}", what, path.display()))?;
    info!(
        "Loaded {} image {} ({}x{})",
        what,
        path.display(),
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}
