//! Calculator screen export

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::calculator::{basic_keypad, scientific_keypad, Calculator};
use crate::{wasm_info, wasm_log};

#[wasm_bindgen(js_name = Calculator)]
pub struct CalculatorHandle {
    calculator: Calculator,
}

#[wasm_bindgen(js_class = Calculator)]
impl CalculatorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CalculatorHandle {
        CalculatorHandle { calculator: Calculator::new() }
    }

    /// Press a key and return the new screen state
    pub fn press(&mut self, key: &str) -> Result<JsValue, JsValue> {
        wasm_log!("calculator press: {}", key);
        self.calculator.press(key);
        self.snapshot()
    }

    #[wasm_bindgen(js_name = liveResult)]
    pub fn live_result(&self) -> String {
        self.calculator.live_result()
    }

    #[wasm_bindgen(js_name = toggleScientific)]
    pub fn toggle_scientific(&mut self) -> Result<JsValue, JsValue> {
        self.calculator.toggle_scientific();
        self.snapshot()
    }

    /// Load history entry `index` back into the display
    #[wasm_bindgen(js_name = loadHistory)]
    pub fn load_history(&mut self, index: usize) -> Result<JsValue, JsValue> {
        if !self.calculator.load_history(index) {
            return Err(JsValue::from_str(&format!("History index {} out of bounds", index)));
        }
        self.snapshot()
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) -> Result<JsValue, JsValue> {
        wasm_info!("clearing {} history entries", self.calculator.history().len());
        self.calculator.clear_history();
        self.snapshot()
    }

    /// Keys for the current mode (basic, or scientific with `2nd`/angle labels)
    pub fn keypad(&self) -> Result<JsValue, JsValue> {
        let keys = if self.calculator.is_scientific() {
            scientific_keypad(self.calculator.is_second(), self.calculator.angle_unit())
        } else {
            basic_keypad()
        };
        serialize(&keys, "Failed to serialize keypad")
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.calculator.snapshot(), "Failed to serialize calculator")
    }
}

impl Default for CalculatorHandle {
    fn default() -> Self {
        Self::new()
    }
}
