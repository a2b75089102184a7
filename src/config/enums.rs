//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color, as produced by a color picker
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rrggbb`/`#rgb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Strings starting with `#` are parsed as hex, anything else as a color
    /// name. Unparseable values fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => {
                let parsed = if name.trim_start().starts_with('#') {
                    Color::from_hex(name)
                } else {
                    crate::util::name_to_color(name)
                };
                parsed.unwrap_or_else(|| {
                    warn!("Unknown color '{}', using black", name);
                    BLACK
                })
            }
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    #[test]
    fn resolves_hex_names_and_rgb() {
        assert_eq!(ColorSpec::Name("#ff0000".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(
            ColorSpec::Rgb([255, 128, 0]).to_color().to_rgb8(),
            [255, 128, 0]
        );
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), BLACK);
    }

    #[test]
    fn hex_requires_leading_hash() {
        // Words spelled with hex digits are names, not colors.
        assert_eq!(ColorSpec::Name("bad".into()).to_color(), BLACK);
        assert_eq!(ColorSpec::Name("facade".into()).to_color(), BLACK);
        assert_eq!(
            ColorSpec::Name("#facade".into()).to_color().to_rgb8(),
            [0xfa, 0xca, 0xde]
        );
        assert_eq!(ColorSpec::Name(" #f00".into()).to_color(), RED);
    }
}
