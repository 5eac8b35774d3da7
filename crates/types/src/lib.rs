//! hoodie-types: Shared data types for the Hoodie watch face.
//!
//! Pure data (shapes, modes, colors, layout constants) with serde support.
//! Cairo helpers are only compiled with the `cairo` feature.

pub mod color;
pub mod face;
pub mod watch;

pub use color::{Color, ColorStop, LinearGradientConfig};
pub use face::FaceConfig;
pub use watch::{WatchMode, WatchShape};
