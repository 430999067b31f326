//! WebAssembly binding for the embedding page.
//!
//! The page gets a `ColorPicker` object with a `selectedColor` property in
//! place of a global accessor. Reads serialize the current color in its
//! remembered format; writes accept `null`, `undefined`, strings and plain
//! objects.

use wasm_bindgen::prelude::*;

use crate::bridge::StateBridge;
use crate::color::RgbColor;
use crate::input::ColorValue;

/// Set up panic reporting and logging once the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by the host page.
        return;
    }
    log::info!("ColorBridge loaded");
}

/// A color bridge owned by the page.
#[wasm_bindgen]
pub struct ColorPicker {
    bridge: StateBridge,
}

#[wasm_bindgen]
impl ColorPicker {
    /// Create a picker from the page's initial color.
    #[wasm_bindgen(constructor)]
    pub fn new(initial: JsValue) -> ColorPicker {
        ColorPicker {
            bridge: StateBridge::initialize(value_from_js(initial)),
        }
    }

    #[wasm_bindgen(getter, js_name = selectedColor)]
    pub fn selected_color(&self) -> String {
        self.bridge.get()
    }

    #[wasm_bindgen(setter, js_name = selectedColor)]
    pub fn set_selected_color(&mut self, value: JsValue) {
        self.bridge.set(value_from_js(value));
    }

    /// Report a finished interaction from the picker UI.
    pub fn update(&mut self, r: u8, g: u8, b: u8) {
        self.bridge.update(RgbColor::new(r, g, b));
    }

    /// The canonical color as `{r, g, b, a}`, for rendering.
    pub fn color(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.bridge.color()).map_err(JsValue::from)
    }

    /// Drain pending state changes as an array of `{type, state}` objects.
    #[wasm_bindgen(js_name = takeChanges)]
    pub fn take_changes(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.bridge.poll_events()).map_err(JsValue::from)
    }
}

/// Convert a page value. Shapes that do not decode count as absent.
fn value_from_js(value: JsValue) -> ColorValue {
    if value.is_null() || value.is_undefined() {
        return ColorValue::Null;
    }
    if let Some(text) = value.as_string() {
        return ColorValue::Text(text);
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        log::debug!("Unreadable color object: {}", e);
        ColorValue::Null
    })
}
