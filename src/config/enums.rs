//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// solid_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// solid_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are parsed through [`Color::from_str`]. Unknown color
    /// names default to red with a warning. RGB arrays are converted from
    /// 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|err| {
                warn!("{err}, using red");
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn named_spec_resolves() {
        assert_eq!(ColorSpec::Name("black".into()).to_color(), BLACK);
    }

    #[test]
    fn unknown_name_falls_back_to_red() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), RED);
    }

    #[test]
    fn rgb_spec_resolves() {
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color(), RED);
    }
}
