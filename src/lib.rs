//! Hoodie: a golden analog watch face
//!
//! This library wires the renderer to its host concerns:
//! - Configuration management
//! - Loading of the texture and emblem images
//! - Conversion from wall-clock time to hand rotations
//! - Rasterizing frames to PNG

pub mod assets;
pub mod clock;
pub mod config;
pub mod frame;

// Re-export commonly used types
pub use clock::HandRotations;
pub use config::AppConfig;
pub use hoodie_render::{FaceAssets, WatchFaceRenderer};
pub use hoodie_types::{FaceConfig, WatchMode, WatchShape};
