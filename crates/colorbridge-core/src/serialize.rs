//! Color serialization.
//!
//! Output is deterministic: hex digits are lowercase, separators are `", "`,
//! and alpha in functional notations is rounded to two decimals. The alpha
//! form is chosen whenever the stored alpha is not exactly 1, even if it
//! prints as `1`.

use crate::color::CanonicalColor;
use crate::format::FormatTag;

/// Write a color out in the given format.
pub fn serialize(color: &CanonicalColor, format: FormatTag) -> String {
    match format {
        // Hex has no room for alpha.
        FormatTag::Hex if color.is_opaque() => to_hex_string(color),
        FormatTag::Hex => to_rgb_string(color),
        FormatTag::Hex8 => to_hex8_string(color),
        FormatTag::Hsl => to_hsl_string(color),
        FormatTag::Prgb => to_prgb_string(color),
        FormatTag::Rgb => to_rgb_string(color),
    }
}

/// `#rrggbb`, ignoring alpha.
pub fn to_hex_string(color: &CanonicalColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// `#rrggbbaa`.
pub fn to_hex8_string(color: &CanonicalColor) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.r,
        color.g,
        color.b,
        color.alpha_byte()
    )
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn to_rgb_string(color: &CanonicalColor) -> String {
    if color.is_opaque() {
        format!("rgb({}, {}, {})", color.r, color.g, color.b)
    } else {
        format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.rounded_alpha())
    }
}

/// `rgb(p%, p%, p%)` or `rgba(p%, p%, p%, a)`.
pub fn to_prgb_string(color: &CanonicalColor) -> String {
    let percent = |c: u8| (c as f64 / 255.0 * 100.0).round() as u8;
    let (r, g, b) = (percent(color.r), percent(color.g), percent(color.b));
    if color.is_opaque() {
        format!("rgb({}%, {}%, {}%)", r, g, b)
    } else {
        format!("rgba({}%, {}%, {}%, {})", r, g, b, color.rounded_alpha())
    }
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
pub fn to_hsl_string(color: &CanonicalColor) -> String {
    let hsl = color.to_hsl();
    let h = hsl.h.round() as u16 % 360;
    let s = (hsl.s * 100.0).round() as u8;
    let l = (hsl.l * 100.0).round() as u8;
    if color.is_opaque() {
        format!("hsl({}, {}%, {}%)", h, s, l)
    } else {
        format!("hsla({}, {}%, {}%, {})", h, s, l, color.rounded_alpha())
    }
}
