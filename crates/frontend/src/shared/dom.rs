//! Thin helpers over web-sys for the page scripts.
//!
//! Listeners attached here live as long as the page: closures are leaked
//! with `forget()` right after registration.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CssStyleDeclaration, Document, Element, EventTarget, HtmlElement,
    NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Class used by every widget to mark the selected element.
pub const ACTIVE: &str = "active";

pub fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document not available"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Collect the element nodes of a `NodeList`, in document order.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&root.query_selector_all(selector)?))
}

/// Attach `handler` for `event` on `target` for the rest of the page lifetime.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`], registered as a passive listener.
pub fn listen_passive<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_active(element: &Element, active: bool) {
    set_class(element, ACTIVE, active);
}

pub fn style(element: &Element) -> Option<CssStyleDeclaration> {
    element.dyn_ref::<HtmlElement>().map(|el| el.style())
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(style) = style(element) {
        let _ = style.set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(style) = style(element) {
        let _ = style.remove_property(property);
    }
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Smoothly scroll `element` into view.
pub fn scroll_into_view(
    element: &Element,
    block: ScrollLogicalPosition,
    inline: Option<ScrollLogicalPosition>,
) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    if let Some(inline) = inline {
        options.set_inline(inline);
    }
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Event target as an element, if it is one.
pub fn target_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Run `f` once the document has been parsed.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut pending = Some(f);
    listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}
