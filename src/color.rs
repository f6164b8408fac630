//! RGB color value used for polygon fills and stroke styles.
//!
//! The color input widget hands the engine CSS hex strings. They are parsed
//! once into a [`Color`] and rendered back out in canonical lowercase
//! `#rrggbb` form, which is also the serde representation.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

/// Parse `#RGB` or `#RRGGBB` into a color. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`EditorError::InvalidColor`] when the value is not a hex color.
pub fn parse_hex(raw: &str) -> Result<Color, EditorError> {
    let invalid = || EditorError::InvalidColor(raw.to_string());
    let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match hex.len() {
        3 => Ok(Color {
            r: channel(&hex[0..1].repeat(2))?,
            g: channel(&hex[1..2].repeat(2))?,
            b: channel(&hex[2..3].repeat(2))?,
        }),
        6 => Ok(Color { r: channel(&hex[0..2])?, g: channel(&hex[2..4])?, b: channel(&hex[4..6])? }),
        _ => Err(invalid()),
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
