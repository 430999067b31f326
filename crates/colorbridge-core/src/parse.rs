//! Color parsing.
//!
//! Parsing happens in two stages. [`try_parse`] classifies a value into a
//! typed [`ColorInput`] and reports why it could not. [`parse`] is the total
//! entry point the bridge relies on: it never fails, and substitutes opaque
//! black in `hex` format for anything it cannot read.

use thiserror::Error;

use crate::color::CanonicalColor;
use crate::format::FormatTag;
use crate::input::{ColorInput, ColorValue, Component};
use crate::names;

/// Why a value could not be read as a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("No color value supplied")]
    Missing,
    #[error("Empty color string")]
    Empty,
    #[error("Unrecognized color syntax: {0}")]
    UnknownSyntax(String),
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("{function}() expects {expected} components, found {found}")]
    ComponentCount {
        function: String,
        expected: &'static str,
        found: usize,
    },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown format tag: {0}")]
    UnknownFormat(String),
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The color and format used when input cannot be read.
pub const DEFAULT_COLOR: (CanonicalColor, FormatTag) = (CanonicalColor::BLACK, FormatTag::Hex);

/// Parse any value into a canonical color and its detected format.
///
/// Absent or malformed input yields [`DEFAULT_COLOR`].
pub fn parse(value: &ColorValue) -> (CanonicalColor, FormatTag) {
    match try_parse(value) {
        Ok(input) => (input.to_canonical(), input.format()),
        Err(e) => {
            log::debug!("Falling back to default color: {}", e);
            DEFAULT_COLOR
        }
    }
}

/// Classify a value into a typed input shape.
pub fn try_parse(value: &ColorValue) -> ParseResult<ColorInput> {
    ColorInput::from_structured(value)
}

/// Classify a textual color.
pub fn parse_str(text: &str) -> ParseResult<ColorInput> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some((name, color)) = names::lookup(&text) {
        return Ok(ColorInput::Named { name, color });
    }

    if let Some(open) = text.find('(') {
        let function = text[..open].trim();
        let args = text[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ParseError::UnknownSyntax(text.clone()))?;
        return parse_function(function, args, &text);
    }

    parse_hex(&text)
}

fn parse_function(function: &str, args: &str, text: &str) -> ParseResult<ColorInput> {
    let components = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(Component::parse)
        .collect::<ParseResult<Vec<_>>>()?;

    let (first, second, third, alpha) = match components.as_slice() {
        [x, y, z] => (*x, *y, *z, None),
        [x, y, z, a] => (*x, *y, *z, Some(*a)),
        _ => {
            return Err(ParseError::ComponentCount {
                function: function.to_string(),
                expected: "3 or 4",
                found: components.len(),
            });
        }
    };

    match function {
        "rgb" | "rgba" => Ok(ColorInput::rgb_family(first, second, third, alpha)),
        "hsl" | "hsla" => Ok(ColorInput::Hsl { h: first, s: second, l: third, a: alpha }),
        "hsv" | "hsva" => Ok(ColorInput::Hsv { h: first, s: second, v: third, a: alpha }),
        _ => Err(ParseError::UnknownSyntax(text.to_string())),
    }
}

fn parse_hex(text: &str) -> ParseResult<ColorInput> {
    let hashed = text.starts_with('#');
    let digits = text.trim_start_matches('#');

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(if hashed {
            ParseError::InvalidHex(text.to_string())
        } else {
            ParseError::UnknownSyntax(text.to_string())
        });
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16);
    let invalid = |_| ParseError::InvalidHex(text.to_string());

    match digits.len() {
        3 => Ok(ColorInput::Hex {
            r: nibble(0).map_err(invalid)?,
            g: nibble(1).map_err(invalid)?,
            b: nibble(2).map_err(invalid)?,
        }),
        4 => Ok(ColorInput::Hex8 {
            r: nibble(0).map_err(invalid)?,
            g: nibble(1).map_err(invalid)?,
            b: nibble(2).map_err(invalid)?,
            a: nibble(3).map_err(invalid)?,
        }),
        6 => Ok(ColorInput::Hex {
            r: byte(0).map_err(invalid)?,
            g: byte(1).map_err(invalid)?,
            b: byte(2).map_err(invalid)?,
        }),
        8 => Ok(ColorInput::Hex8 {
            r: byte(0).map_err(invalid)?,
            g: byte(1).map_err(invalid)?,
            b: byte(2).map_err(invalid)?,
            a: byte(3).map_err(invalid)?,
        }),
        _ if hashed => Err(ParseError::InvalidHex(text.to_string())),
        _ => Err(ParseError::UnknownSyntax(text.to_string())),
    }
}
