//! Input shapes accepted by the parser.
//!
//! [`ColorValue`] is what crosses the accessor boundary: nothing, a string,
//! or a structured object. [`ColorInput`] is what the parser classifies it
//! into: one variant per syntactic shape, each carrying its raw components.

use serde::{Deserialize, Serialize};

use crate::color::{CanonicalColor, HslColor, HsvColor, RgbColor, channel, clamp_alpha};
use crate::format::FormatTag;
use crate::parse::ParseError;

/// An external color value as supplied by the embedding environment.
///
/// Deserializes from JSON `null`, a string, or an object carrying
/// `r/g/b`, `h/s/l` or `h/s/v` fields (with an optional `a`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Absent, `null` or `undefined`.
    #[default]
    Null,
    /// Any textual color notation.
    Text(String),
    /// Structured RGB; components may be numbers or `"50%"` strings.
    Rgb {
        r: ComponentValue,
        g: ComponentValue,
        b: ComponentValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<ComponentValue>,
    },
    /// Structured HSL.
    Hsl {
        h: ComponentValue,
        s: ComponentValue,
        l: ComponentValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<ComponentValue>,
    },
    /// Structured HSV.
    Hsv {
        h: ComponentValue,
        s: ComponentValue,
        v: ComponentValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<ComponentValue>,
    },
}

impl ColorValue {
    /// Decode a JSON document into a value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ColorValue::Null)
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Text(s.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::Text(s)
    }
}

impl From<RgbColor> for ColorValue {
    fn from(rgb: RgbColor) -> Self {
        ColorValue::Rgb {
            r: ComponentValue::Number(rgb.r as f64),
            g: ComponentValue::Number(rgb.g as f64),
            b: ComponentValue::Number(rgb.b as f64),
            a: None,
        }
    }
}

impl From<CanonicalColor> for ColorValue {
    fn from(color: CanonicalColor) -> Self {
        ColorValue::Rgb {
            r: ComponentValue::Number(color.r as f64),
            g: ComponentValue::Number(color.g as f64),
            b: ComponentValue::Number(color.b as f64),
            a: Some(ComponentValue::Number(color.a)),
        }
    }
}

impl<T: Into<ColorValue>> From<Option<T>> for ColorValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ColorValue::Null, Into::into)
    }
}

/// A structured component: a bare number or a string such as `"50%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentValue {
    Number(f64),
    Text(String),
}

impl ComponentValue {
    fn to_component(&self) -> Result<Component, ParseError> {
        match self {
            ComponentValue::Number(value) => Ok(Component::number(*value)),
            ComponentValue::Text(text) => Component::parse(text),
        }
    }
}

/// A numeric component with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub value: f64,
    pub percent: bool,
}

impl Component {
    pub const fn number(value: f64) -> Self {
        Self { value, percent: false }
    }

    pub const fn percent(value: f64) -> Self {
        Self { value, percent: true }
    }

    /// Parse `12`, `-3.5`, `.5` or `50%`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let (number, percent) = match text.strip_suffix('%') {
            Some(number) => (number, true),
            None => (text, false),
        };

        let well_formed = !number.is_empty()
            && number.bytes().any(|b| b.is_ascii_digit())
            && number
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+'));
        if !well_formed {
            return Err(ParseError::InvalidNumber(text.to_string()));
        }

        number
            .parse::<f64>()
            .map(|value| Self { value, percent })
            .map_err(|_| ParseError::InvalidNumber(text.to_string()))
    }

    /// An RGB channel on the 0-255 scale.
    fn channel(self) -> f64 {
        if self.percent {
            self.value.clamp(0.0, 100.0) / 100.0 * 255.0
        } else {
            self.value
        }
    }

    /// A saturation/lightness/value fraction. Bare numbers above 1 are
    /// read as percentages.
    fn fraction(self) -> f64 {
        if self.percent || self.value > 1.0 {
            self.value.clamp(0.0, 100.0) / 100.0
        } else {
            self.value.clamp(0.0, 1.0)
        }
    }

    fn alpha(self) -> f64 {
        if self.percent {
            clamp_alpha(self.value / 100.0)
        } else {
            clamp_alpha(self.value)
        }
    }
}

/// A classified input, one variant per syntactic shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    /// `#rgb` or `#rrggbb`.
    Hex { r: u8, g: u8, b: u8 },
    /// `#rgba` or `#rrggbbaa`.
    Hex8 { r: u8, g: u8, b: u8, a: u8 },
    /// `rgb()`/`rgba()` with a numeric red channel, or a structured RGB object.
    Rgb { r: Component, g: Component, b: Component, a: Option<Component> },
    /// `rgb()`/`rgba()` with a percentage red channel.
    Prgb { r: Component, g: Component, b: Component, a: Option<Component> },
    /// `hsl()`/`hsla()` or a structured HSL object.
    Hsl { h: Component, s: Component, l: Component, a: Option<Component> },
    /// `hsv()`/`hsva()` or a structured HSV object.
    Hsv { h: Component, s: Component, v: Component, a: Option<Component> },
    /// A CSS color keyword.
    Named { name: &'static str, color: CanonicalColor },
}

impl ColorInput {
    /// Classify a structured value. Text is left to the string parser.
    pub(crate) fn from_structured(value: &ColorValue) -> Result<Self, ParseError> {
        let alpha = |a: &Option<ComponentValue>| a.as_ref().map(|a| a.to_component()).transpose();

        match value {
            ColorValue::Null => Err(ParseError::Missing),
            ColorValue::Text(text) => crate::parse::parse_str(text),
            ColorValue::Rgb { r, g, b, a } => {
                let (r, g, b, a) = (r.to_component()?, g.to_component()?, b.to_component()?, alpha(a)?);
                Ok(ColorInput::rgb_family(r, g, b, a))
            }
            ColorValue::Hsl { h, s, l, a } => Ok(ColorInput::Hsl {
                h: h.to_component()?,
                s: s.to_component()?,
                l: l.to_component()?,
                a: alpha(a)?,
            }),
            ColorValue::Hsv { h, s, v, a } => Ok(ColorInput::Hsv {
                h: h.to_component()?,
                s: s.to_component()?,
                v: v.to_component()?,
                a: alpha(a)?,
            }),
        }
    }

    /// `rgb` or `prgb`, decided by the unit of the red channel.
    pub(crate) fn rgb_family(r: Component, g: Component, b: Component, a: Option<Component>) -> Self {
        if r.percent {
            ColorInput::Prgb { r, g, b, a }
        } else {
            ColorInput::Rgb { r, g, b, a }
        }
    }

    /// The format this shape is written back out in.
    pub fn format(&self) -> FormatTag {
        match self {
            ColorInput::Hex { .. } => FormatTag::Hex,
            ColorInput::Hex8 { .. } => FormatTag::Hex8,
            ColorInput::Rgb { .. } => FormatTag::Rgb,
            ColorInput::Prgb { .. } => FormatTag::Prgb,
            ColorInput::Hsl { .. } => FormatTag::Hsl,
            // Neither has a tag of its own.
            ColorInput::Hsv { .. } | ColorInput::Named { .. } => FormatTag::Hex,
        }
    }

    /// Convert to the canonical color, clamping every component.
    pub fn to_canonical(&self) -> CanonicalColor {
        let alpha = |a: &Option<Component>| a.map_or(1.0, Component::alpha);

        match self {
            ColorInput::Hex { r, g, b } => CanonicalColor::opaque(*r, *g, *b),
            ColorInput::Hex8 { r, g, b, a } => CanonicalColor::new(*r, *g, *b, *a as f64 / 255.0),
            ColorInput::Rgb { r, g, b, a } | ColorInput::Prgb { r, g, b, a } => CanonicalColor::new(
                channel(r.channel()),
                channel(g.channel()),
                channel(b.channel()),
                alpha(a),
            ),
            ColorInput::Hsl { h, s, l, a } => HslColor {
                h: h.value,
                s: s.fraction(),
                l: l.fraction(),
                a: alpha(a),
            }
            .to_canonical(),
            ColorInput::Hsv { h, s, v, a } => HsvColor {
                h: h.value,
                s: s.fraction(),
                v: v.fraction(),
                a: alpha(a),
            }
            .to_canonical(),
            ColorInput::Named { color, .. } => *color,
        }
    }
}
