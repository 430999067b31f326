//! Format tags: which textual family a color is written back out in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parse::ParseError;

/// The remembered output format of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// `#rrggbb`, degrading to `rgba(...)` when the color is translucent.
    #[default]
    Hex,
    /// `#rrggbbaa`.
    Hex8,
    /// `hsl(h, s%, l%)` / `hsla(...)`.
    Hsl,
    /// `rgb(p%, p%, p%)` / `rgba(...)`.
    Prgb,
    /// `rgb(r, g, b)` / `rgba(...)`.
    Rgb,
}

impl FormatTag {
    /// All tags, in declaration order.
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Hex,
        FormatTag::Hex8,
        FormatTag::Hsl,
        FormatTag::Prgb,
        FormatTag::Rgb,
    ];

    /// Lowercase name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            FormatTag::Hex => "hex",
            FormatTag::Hex8 => "hex8",
            FormatTag::Hsl => "hsl",
            FormatTag::Prgb => "prgb",
            FormatTag::Rgb => "rgb",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hex() {
        assert_eq!(FormatTag::default(), FormatTag::Hex);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HSL".parse::<FormatTag>().unwrap(), FormatTag::Hsl);
        assert_eq!(" prgb ".parse::<FormatTag>().unwrap(), FormatTag::Prgb);
        assert!(matches!(
            "name".parse::<FormatTag>(),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&FormatTag::Hex8).unwrap(), "\"hex8\"");
        let tag: FormatTag = serde_json::from_str("\"rgb\"").unwrap();
        assert_eq!(tag, FormatTag::Rgb);
    }
}
