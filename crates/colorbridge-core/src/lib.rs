//! ColorBridge Core Library
//!
//! Format-preserving color state: parse any supported color notation into a
//! canonical RGBA value, remember the notation it came in, and write the
//! current color back out in that notation.

pub mod bridge;
pub mod color;
pub mod format;
pub mod input;
pub mod names;
pub mod parse;
pub mod serialize;

#[cfg(target_arch = "wasm32")]
mod web;

pub use bridge::{ColorState, MAX_PENDING_EVENTS, StateBridge, StateChange};
pub use color::{CanonicalColor, HslColor, HsvColor, RgbColor};
pub use format::FormatTag;
pub use input::{ColorInput, ColorValue, Component, ComponentValue};
pub use parse::{DEFAULT_COLOR, ParseError, ParseResult, parse, parse_str, try_parse};
pub use serialize::serialize;

#[cfg(target_arch = "wasm32")]
pub use web::ColorPicker;
