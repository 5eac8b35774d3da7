//! Configuration management

mod settings;

pub use settings::{AppConfig, AssetConfig, ScreenConfig, CONFIG_VERSION};
