//! Canonical text encodings of a color: the `#rrggbb` hex form and the CSS
//! `rgb()` functional form.

use crate::{
    color::{Color, Component, Space},
    models::{rgb::Srgb, Model},
};

/// Scale a [0, 1] component to the [0, 255] range and round it to the
/// nearest integer, ties away from zero. NaN stays NaN.
fn to_u8_scale(value: Component) -> Component {
    (value * 255.0).round()
}

impl Srgb {
    /// Format this color as a `#rrggbb` hex string with lowercase digits.
    ///
    /// Components are expected to be finite and in [0, 1]. A NaN component
    /// (the [`Srgb::from_hex`] failure sentinel) encodes as `00`; callers
    /// that need to distinguish the sentinel from black must check for NaN
    /// before formatting.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_u8_scale(self.red) as u8,
            to_u8_scale(self.green) as u8,
            to_u8_scale(self.blue) as u8,
        )
    }

    /// Parse a `#rrggbb` hex string, case-insensitive, into an sRGB color.
    ///
    /// Anything that is not a `#` followed by exactly 6 hex digits yields a
    /// color with all components NaN instead of an error; callers check for
    /// NaN before using the result.
    pub fn from_hex(hex: &str) -> Self {
        fn parse(hex: &str) -> Option<(u8, u8, u8)> {
            let digits = hex.strip_prefix('#')?;
            if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((red, green, blue))
        }

        match parse(hex) {
            Some((red, green, blue)) => Self::new(
                red as Component / 255.0,
                green as Component / 255.0,
                blue as Component / 255.0,
            ),
            None => Self::new(Component::NAN, Component::NAN, Component::NAN),
        }
    }

    /// Format this color as a CSS `rgb(r,g,b)` string with the components
    /// scaled to [0, 255] and rounded to whole numbers.
    pub fn to_css_string(&self) -> String {
        format!(
            "rgb({},{},{})",
            to_u8_scale(self.red),
            to_u8_scale(self.green),
            to_u8_scale(self.blue),
        )
    }
}

impl Color {
    /// Format this color, converted to sRGB if needed, as a `#rrggbb` hex
    /// string.
    pub fn to_hex(&self) -> String {
        Srgb::to_model(&self.to_space(Space::Srgb)).to_hex()
    }

    /// Parse a `#rrggbb` hex string into a color in the sRGB space. A
    /// malformed string yields all components NaN.
    pub fn from_hex(hex: &str) -> Self {
        Srgb::from_hex(hex).to_color()
    }

    /// Format this color, converted to sRGB if needed, as a CSS `rgb()`
    /// string.
    pub fn to_css_string(&self) -> String {
        Srgb::to_model(&self.to_space(Space::Srgb)).to_css_string()
    }
}
