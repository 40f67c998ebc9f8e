//! Math input field, evaluator and preview exports

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, validate_index};
use super::types::{EditResult, EvaluationResult};
use crate::eval::evaluate;
use crate::keyboard::{MathInput, Tab, TabLayout};
use crate::models::AngleUnit;
use crate::renderers::render_preview;
use crate::text::Direction;
use crate::{wasm_info, wasm_log};

/// Math input field driven by the on-screen keyboard
#[wasm_bindgen(js_name = MathInput)]
pub struct MathInputHandle {
    input: MathInput,
    angle_unit: AngleUnit,
}

#[wasm_bindgen(js_class = MathInput)]
impl MathInputHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(text: Option<String>) -> MathInputHandle {
        let input = match text.as_deref() {
            Some(text) => MathInput::from_text(text),
            None => MathInput::new(),
        };
        MathInputHandle { input, angle_unit: AngleUnit::Degrees }
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.input.text()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    #[wasm_bindgen(js_name = setAngleUnit)]
    pub fn set_angle_unit(&mut self, angle_unit: AngleUnit) {
        self.angle_unit = angle_unit;
    }

    /// Press key `index` of `tab`
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, tab: Tab, index: usize) -> Result<JsValue, JsValue> {
        let keys = tab.keys();
        validate_index(index, keys.len(), tab.name()).map_err(|e| JsValue::from_str(&e))?;

        wasm_log!("pressKey: tab={}, index={}", tab.name(), index);
        self.input.press(&keys[index]);
        self.result(None)
    }

    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.input.insert(text);
        self.result(None)
    }

    #[wasm_bindgen(js_name = deleteBackward)]
    pub fn delete_backward(&mut self) -> Result<JsValue, JsValue> {
        let removed = self.input.delete();
        self.result(removed)
    }

    #[wasm_bindgen(js_name = moveCursor)]
    pub fn move_cursor(&mut self, direction: Direction) -> Result<JsValue, JsValue> {
        self.input.move_cursor(direction);
        self.result(None)
    }

    /// Place the cursor from a click; snapped out of atomic tokens
    #[wasm_bindgen(js_name = setCursor)]
    pub fn set_cursor(&mut self, pos: usize) -> Result<JsValue, JsValue> {
        self.input.set_cursor(pos);
        self.result(None)
    }

    pub fn clear(&mut self) -> Result<JsValue, JsValue> {
        self.input.clear();
        self.result(None)
    }

    pub fn preview(&self) -> String {
        self.input.preview()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.input.snapshot(self.angle_unit), "Failed to serialize input snapshot")
    }
}

impl MathInputHandle {
    fn result(&self, removed: Option<String>) -> Result<JsValue, JsValue> {
        let result = EditResult::from_input(&self.input, self.angle_unit, removed);
        serialize(&result, "Failed to serialize edit result")
    }
}

/// Evaluate free text; `{ value: null, display: "" }` when it has no result
#[wasm_bindgen(js_name = evaluateExpression)]
pub fn evaluate_expression(text: &str, angle_unit: AngleUnit) -> Result<JsValue, JsValue> {
    let evaluation = evaluate(text, angle_unit);
    let result = EvaluationResult { value: evaluation.value(), display: evaluation.display() };
    serialize(&result, "Failed to serialize evaluation")
}

/// Preview LaTeX for `text`, with the cursor bar at `cursor` when given
#[wasm_bindgen(js_name = renderPreviewLatex)]
pub fn render_preview_latex(text: &str, cursor: Option<usize>) -> String {
    render_preview(text, cursor)
}

#[wasm_bindgen(js_name = getKeyboardTab)]
pub fn get_keyboard_tab(tab: Tab) -> Result<JsValue, JsValue> {
    wasm_info!("getKeyboardTab: {}", tab.name());
    serialize(&TabLayout::from(tab), "Failed to serialize keyboard tab")
}

/// Tab captions in display order
#[wasm_bindgen(js_name = getKeyboardTabs)]
pub fn get_keyboard_tabs() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Tab::ALL.iter().map(|tab| tab.name()).collect();
    serialize(&names, "Failed to serialize keyboard tabs")
}
