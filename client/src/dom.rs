use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, PointerEvent, Window};

use blackboard_shared::{DisplayMode, Point, Viewport};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Pointer position relative to the canvas' own padding box.
pub fn event_to_point(event: &PointerEvent) -> Point {
    Point::new(event.offset_x() as f32, event.offset_y() as f32)
}

pub fn set_expand_label(button: &HtmlButtonElement, mode: DisplayMode) {
    button.set_text_content(Some(mode.toggle_label()));
    let pressed = if mode.is_expanded() { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

pub fn set_busy(button: &HtmlButtonElement, busy: bool) {
    let value = if busy { "true" } else { "false" };
    let _ = button.set_attribute("aria-busy", value);
}

pub fn set_board_mode(board_el: &web_sys::Element, mode: DisplayMode) {
    let value = if mode.is_expanded() { "expanded" } else { "normal" };
    let _ = board_el.set_attribute("data-mode", value);
}
