//! Screen shape and display mode reported by the host watch-face runtime

use serde::{Deserialize, Serialize};

/// Physical shape of the watch screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WatchShape {
    #[serde(rename = "round")]
    #[default]
    Round,
    #[serde(rename = "square")]
    Square,
}

/// Display mode of the watch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WatchMode {
    /// Full color, normal refresh rate
    #[serde(rename = "interactive")]
    #[default]
    Interactive,
    /// Low-power always-on display
    #[serde(rename = "ambient")]
    Ambient,
    /// Ambient with reduced color depth, anti-aliasing must be off
    #[serde(rename = "low_bit")]
    LowBit,
}

impl WatchMode {
    pub fn is_interactive(self) -> bool {
        self == WatchMode::Interactive
    }

    pub fn anti_alias(self) -> bool {
        self != WatchMode::LowBit
    }
}
