use std::{fmt, str::FromStr};

use color::DynamicColor;

use crate::{attributes::AttrValue, palette::named_color};

/// A CSS color string that has been checked by the `color` parser.
///
/// Keeps the original spelling for output: `"grey"` stays `"grey"` and is not
/// expanded to an rgb triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    css: String,
}

impl Color {
    /// Parse a CSS color string such as "#ff0000", "rgb(255, 0, 0)" or "red".
    ///
    /// Every name in [`NAMED_COLORS`](crate::palette::NAMED_COLORS) is
    /// accepted, including the `grey` spellings the CSS parser lacks.
    pub fn new(color_str: &str) -> Result<Self, String> {
        if named_color(&color_str.to_ascii_lowercase()).is_some() {
            return Ok(Color {
                css: color_str.to_string(),
            });
        }
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Color {
                css: color_str.to_string(),
            }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// The color as written by the caller.
    pub fn as_css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl From<&Color> for AttrValue {
    fn from(color: &Color) -> Self {
        AttrValue::Str(color.css.clone())
    }
}

/// Format an rgb triple the way CSS writes it: `rgb(r, g, b)`.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}
