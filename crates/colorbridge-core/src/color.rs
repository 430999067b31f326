//! Color models: the canonical RGBA value and the intermediate HSL/HSV forms.
//!
//! Every external representation converts to and from [`CanonicalColor`].
//! HSL and HSV only exist long enough to get there.

use serde::{Deserialize, Serialize};

/// The canonical color all formats convert to and from.
///
/// Channels are 0-255 integers, alpha is a real in 0.0-1.0. The constructor
/// clamps alpha so the invariant holds for every value in circulation,
/// deserialized ones included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CanonicalColorRepr")]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl CanonicalColor {
    /// Opaque black, the fallback for anything that fails to parse.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 1.0 };

    /// Create a color, clamping alpha into 0.0-1.0 (NaN becomes opaque).
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: clamp_alpha(a) }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from unclamped floating point channels (0-255 scale).
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b), a)
    }

    /// The color without its alpha.
    pub const fn rgb(&self) -> RgbColor {
        RgbColor { r: self.r, g: self.g, b: self.b }
    }

    /// Replace the RGB channels, keeping alpha.
    pub const fn with_rgb(self, rgb: RgbColor) -> Self {
        Self { r: rgb.r, g: rgb.g, b: rgb.b, a: self.a }
    }

    /// Whether alpha is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Alpha rounded to two decimals, as printed by the functional notations.
    pub fn rounded_alpha(&self) -> f64 {
        (self.a * 100.0).round() / 100.0
    }

    /// Alpha as a byte (0-255), rounded to nearest.
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round() as u8
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> HslColor {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor { h: 0.0, s: 0.0, l, a: self.a };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        HslColor { h: h * 60.0, s, l, a: self.a }
    }
}

/// Unchecked wire form, clamped on the way in.
#[derive(Deserialize)]
struct CanonicalColorRepr {
    r: u8,
    g: u8,
    b: u8,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

fn opaque_alpha() -> f64 {
    1.0
}

impl From<CanonicalColorRepr> for CanonicalColor {
    fn from(repr: CanonicalColorRepr) -> Self {
        Self::new(repr.r, repr.g, repr.b, repr.a)
    }
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<CanonicalColor> for peniko::Color {
    fn from(color: CanonicalColor) -> Self {
        peniko::Color::from_rgba8(color.r, color.g, color.b, color.alpha_byte())
    }
}

/// A plain numeric RGB value, the only thing the picker widget emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<CanonicalColor> for RgbColor {
    fn from(color: CanonicalColor) -> Self {
        color.rgb()
    }
}

/// Hue in degrees (0-360), saturation and lightness as fractions (0-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl HslColor {
    pub fn to_canonical(&self) -> CanonicalColor {
        let h = self.h.clamp(0.0, 360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = l * 255.0;
            return CanonicalColor::from_channels(v, v, v, self.a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        CanonicalColor::from_channels(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
            self.a,
        )
    }
}

/// Hue in degrees (0-360), saturation and value as fractions (0-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl HsvColor {
    pub fn to_canonical(&self) -> CanonicalColor {
        let h = self.h.clamp(0.0, 360.0) / 360.0 * 6.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as u32) % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        CanonicalColor::from_channels(r * 255.0, g * 255.0, b * 255.0, self.a)
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Clamp and round a 0-255 scale value to a channel byte.
pub(crate) fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

/// Clamp alpha into 0.0-1.0; non-numeric alpha means opaque.
pub(crate) fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_alpha() {
        assert_eq!(CanonicalColor::new(1, 2, 3, 1.5).a, 1.0);
        assert_eq!(CanonicalColor::new(1, 2, 3, -0.2).a, 0.0);
        assert_eq!(CanonicalColor::new(1, 2, 3, f64::NAN).a, 1.0);
    }

    #[test]
    fn test_from_channels_clamps_and_rounds() {
        let color = CanonicalColor::from_channels(300.0, -12.0, 127.5, 1.0);
        assert_eq!((color.r, color.g, color.b), (255, 0, 128));
    }

    #[test]
    fn test_rgb_to_hsl() {
        let hsl = CanonicalColor::opaque(10, 20, 30).to_hsl();
        assert_eq!(hsl.h.round(), 210.0);
        assert_eq!((hsl.s * 100.0).round(), 50.0);
        assert_eq!((hsl.l * 100.0).round(), 8.0);
    }

    #[test]
    fn test_gray_has_no_hue() {
        let hsl = CanonicalColor::opaque(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn test_hsl_to_canonical() {
        let red = HslColor { h: 0.0, s: 1.0, l: 0.5, a: 1.0 }.to_canonical();
        assert_eq!(red, CanonicalColor::opaque(255, 0, 0));

        let orange = HslColor { h: 20.0, s: 0.6, l: 0.49, a: 1.0 }.to_canonical();
        assert_eq!(orange, CanonicalColor::opaque(200, 100, 50));
    }

    #[test]
    fn test_hsv_to_canonical() {
        let green = HsvColor { h: 120.0, s: 1.0, v: 1.0, a: 0.5 }.to_canonical();
        assert_eq!(green, CanonicalColor::new(0, 255, 0, 0.5));

        let white = HsvColor { h: 300.0, s: 0.0, v: 1.0, a: 1.0 }.to_canonical();
        assert_eq!(white, CanonicalColor::opaque(255, 255, 255));
    }

    #[test]
    fn test_with_rgb_keeps_alpha() {
        let color = CanonicalColor::new(1, 2, 3, 0.25).with_rgb(RgbColor::new(9, 8, 7));
        assert_eq!(color, CanonicalColor::new(9, 8, 7, 0.25));
    }

    #[test]
    fn test_peniko_conversion() {
        let color: peniko::Color = CanonicalColor::opaque(255, 0, 0).into();
        assert_eq!(color.components, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_deserialize_clamps_alpha() {
        let color: CanonicalColor = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":5.0}"#).unwrap();
        assert_eq!(color, CanonicalColor::opaque(1, 2, 3));

        let color: CanonicalColor = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":-0.5}"#).unwrap();
        assert_eq!(color.a, 0.0);

        let color: CanonicalColor = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert!(color.is_opaque());
    }
}
