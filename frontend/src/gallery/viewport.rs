//! Simulated-fullscreen presentation. All document/body style writes for
//! the immersive mode live here so there is exactly one restore path no
//! matter which trigger (toggle, Escape, modal close) fires it.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const MARKER_CLASS: &str = "immersive-active";

fn roots() -> Option<(HtmlElement, HtmlElement)> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?.dyn_into::<HtmlElement>().ok()?;
    let body = document.body()?;
    Some((root, body))
}

/// Idempotent: applying twice leaves the same immersive state.
pub fn enter_immersive() {
    if let Some((root, body)) = roots() {
        let _ = body.class_list().add_1(MARKER_CLASS);
        for el in [&root, &body] {
            let _ = el.style().set_property("overflow", "hidden");
            let _ = el.style().set_property("background-color", "#000000");
        }
    }
}

/// Idempotent: safe to call when immersive mode was never entered.
pub fn exit_immersive() {
    if let Some((root, body)) = roots() {
        let _ = body.class_list().remove_1(MARKER_CLASS);
        for el in [&root, &body] {
            let _ = el.style().remove_property("overflow");
            let _ = el.style().remove_property("background-color");
        }
    }
}
