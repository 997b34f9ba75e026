//! Small web-sys helpers shared by every effect

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::FxError;
use crate::fx::Rect;

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> Result<Document, FxError> {
    window()?.document().ok_or(FxError::NoWindow)
}

pub fn by_id(id: &'static str) -> Result<Element, FxError> {
    document()?
        .get_element_by_id(id)
        .ok_or(FxError::MissingElement(id))
}

pub fn query(selector: &'static str) -> Result<Element, FxError> {
    document()?
        .query_selector(selector)?
        .ok_or(FxError::MissingElement(selector))
}

/// Every element matching `selector`; an empty match is an error
pub fn query_all(selector: &'static str) -> Result<Vec<Element>, FxError> {
    let list = document()?.query_selector_all(selector)?;
    let elements: Vec<Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    if elements.is_empty() {
        return Err(FxError::MissingElement(selector));
    }
    Ok(elements)
}

/// Rendered text (`innerText` for HTML elements)
pub fn inner_text(el: &Element) -> String {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => el.text_content().unwrap_or_default(),
    }
}

/// Set an inline style property; ignored for non-HTML elements
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Viewport height in CSS pixels
pub fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport width in CSS pixels
pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Register a listener for the page's lifetime
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FxError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Seed for effect RNGs
pub fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}
