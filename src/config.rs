//! Editor configuration supplied by the host page.
//!
//! The host passes a JSON object. Every field is optional; missing fields
//! fall back to the defaults below.
//!
//! ```json
//! {
//!   "initial_color": "#0096ff",
//!   "canvas_width": 800,
//!   "canvas_height": 600,
//!   "styles": { "hovered": { "color": "#ffa500", "width": 2.0 } }
//! }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FILL};
use crate::error::EditorError;
use crate::scene::StylePalette;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Fill of the first polygon and initial value of the color input.
    pub initial_color: Color,
    /// Drawing surface width in CSS pixels.
    pub canvas_width: u32,
    /// Drawing surface height in CSS pixels.
    pub canvas_height: u32,
    /// Outline styles.
    pub styles: StylePalette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_color: DEFAULT_FILL,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            styles: StylePalette::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Config`] for malformed JSON, unknown value
    /// types, invalid colors, or a zero-sized canvas.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| EditorError::Config(e.to_string()))?;
        if config.canvas_width == 0 || config.canvas_height == 0 {
            return Err(EditorError::Config(format!(
                "canvas size must be non-zero, got {}x{}",
                config.canvas_width, config.canvas_height
            )));
        }
        Ok(config)
    }
}
