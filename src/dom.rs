use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SetupError;

pub fn window_and_document() -> Result<(Window, Document), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoDocument)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    Ok((window, document))
}

/// All elements matching `selectors` under `root`, as `HtmlElement`s.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selectors: &str) -> Vec<HtmlElement> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(document) = node.dyn_ref::<Document>() {
        document.query_selector_all(selectors)
    } else if let Some(element) = node.dyn_ref::<Element>() {
        element.query_selector_all(selectors)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &Document, selectors: &'static str) -> Result<HtmlElement, SetupError> {
    document
        .query_selector(selectors)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SetupError::MissingElement(selectors))
}

/// Viewport size in CSS pixels.
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
