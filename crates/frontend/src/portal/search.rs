//! Center search box: engine selection and submit.

use crate::shared::dom;
use portal_contracts::widgets::search::{placeholder_for, search_message};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent};

const ENGINE_SELECTOR: &str = ".search-engine-option";

pub fn init_search() -> Result<(), JsValue> {
    let document = dom::document()?;
    let input = document
        .query_selector(".center-search-input")?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    let options = Rc::new(dom::select_all(&document, ENGINE_SELECTOR)?);
    for option in options.iter() {
        let options = Rc::clone(&options);
        let option_el = option.clone();
        let input = input.clone();
        dom::listen(option, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            for other in options.iter() {
                dom::set_active(other, *other == option_el);
            }
            if let Some(input) = &input {
                let engine = option_el.text_content().unwrap_or_default();
                input.set_placeholder(&placeholder_for(&engine));
            }
        })?;
    }

    let Some(input) = input else {
        return Ok(());
    };
    bind_focus_shadow(&input)?;

    let Some(button) = document.query_selector(".center-search-button")? else {
        return Ok(());
    };
    let click_input = input.clone();
    dom::listen(&button, "click", move |_: MouseEvent| perform_search(&click_input))?;

    let key_input = input.clone();
    dom::listen(&input, "keypress", move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            perform_search(&key_input);
        }
    })
}

fn perform_search(input: &HtmlInputElement) {
    let active_engine: Option<Element> = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&format!("{ENGINE_SELECTOR}.active")).ok().flatten());
    let engine = active_engine.and_then(|e| e.text_content());

    let Some(message) = search_message(engine.as_deref(), &input.value()) else {
        return;
    };
    log::info!("{message}");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}

fn bind_focus_shadow(input: &HtmlInputElement) -> Result<(), JsValue> {
    let Some(parent) = input.parent_element() else {
        return Ok(());
    };
    let focus_parent = parent.clone();
    dom::listen(input, "focus", move |_: Event| {
        dom::set_style(&focus_parent, "box-shadow", "0 0 0 2px rgba(30, 136, 229, 0.3)");
    })?;
    dom::listen(input, "blur", move |_: Event| dom::clear_style(&parent, "box-shadow"))
}
