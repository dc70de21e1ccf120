//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen defaults when the overlay first opens. Users change
/// these at runtime with the width/color commands; the config only sets the
/// starting point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color by palette name: red, blue, green, or black
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default pen width in pixels (one of 2, 4, 5, 6, 7, 8, 10)
    #[serde(default = "default_width")]
    pub default_width: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show a dot at the pointer position while hovering (not drawing),
    /// previewing the current pen width and color
    #[serde(default = "default_show_cursor_indicator")]
    pub show_cursor_indicator: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_cursor_indicator: default_show_cursor_indicator(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> String {
    "red".to_string()
}

fn default_width() -> u32 {
    5
}

fn default_show_cursor_indicator() -> bool {
    true
}
