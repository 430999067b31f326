//! Color state definition.

use serde::{Deserialize, Serialize};

use crate::color::{CanonicalColor, RgbColor};
use crate::format::FormatTag;
use crate::input::ColorValue;
use crate::parse;
use crate::serialize;

/// The current color together with the format it is written back out in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorState {
    pub color: CanonicalColor,
    pub format: FormatTag,
}

impl ColorState {
    pub const fn new(color: CanonicalColor, format: FormatTag) -> Self {
        Self { color, format }
    }

    /// Parse an external value. Unreadable input gives opaque black in `hex`.
    pub fn from_value(value: &ColorValue) -> Self {
        let (color, format) = parse::parse(value);
        Self { color, format }
    }

    /// The color in the remembered format.
    pub fn to_text(&self) -> String {
        serialize::serialize(&self.color, self.format)
    }

    /// Replace the RGB channels. Alpha and format are kept.
    pub fn with_rgb(self, rgb: RgbColor) -> Self {
        Self {
            color: self.color.with_rgb(rgb),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        let state = ColorState::from_value(&ColorValue::from("hsl(0, 100%, 50%)"));
        assert_eq!(state.color, CanonicalColor::opaque(255, 0, 0));
        assert_eq!(state.format, FormatTag::Hsl);
        assert_eq!(state.to_text(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_with_rgb_keeps_format_and_alpha() {
        let state = ColorState::new(CanonicalColor::new(1, 2, 3, 0.5), FormatTag::Prgb);
        let state = state.with_rgb(RgbColor::new(255, 255, 255));
        assert_eq!(state.format, FormatTag::Prgb);
        assert_eq!(state.color.a, 0.5);
        assert_eq!(state.to_text(), "rgba(100%, 100%, 100%, 0.5)");
    }

    #[test]
    fn test_serialize_snapshot() {
        let state = ColorState::new(CanonicalColor::opaque(1, 2, 3), FormatTag::Hex8);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"color":{"r":1,"g":2,"b":3,"a":1.0},"format":"hex8"}"#);
    }

    #[test]
    fn test_deserialize_keeps_alpha_in_range() {
        let json = r#"{"color":{"r":1,"g":2,"b":3,"a":5.0},"format":"rgb"}"#;
        let state: ColorState = serde_json::from_str(json).unwrap();
        assert_eq!(state.color.a, 1.0);
        assert_eq!(state.to_text(), "rgb(1, 2, 3)");
    }
}
