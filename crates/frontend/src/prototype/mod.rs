//! Prototype demo page (`<body data-page="prototype">`).
//!
//! Shows the portal's interaction states in isolation: hover and focus
//! classes, the three menu layouts, tab and engine switching, pulsing demo
//! elements, collapsible device previews and copyable colour swatches.

pub mod styles;
pub mod swatches;

use crate::portal::tabs::{bind_tab_group, ClickPolicy};
use crate::shared::dom;
use gloo_timers::callback::Interval;
use portal_contracts::shared::config::PrototypeConfig;
use portal_contracts::widgets::tab_group::{PanelSuffix, TabSwitch};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, MouseEvent};

/// Title of the responsive preview that starts expanded.
const DEFAULT_EXPANDED_VIEW: &str = "平板视图";

pub fn start(config: &PrototypeConfig) {
    let tooltip_ms = config.tooltip_ms;
    let steps: [(&str, Box<dyn FnOnce() -> Result<(), JsValue>>); 8] = [
        ("hover classes", Box::new(init_hover_classes)),
        ("search focus", Box::new(init_search_focus)),
        ("menu toggles", Box::new(init_menu_toggles)),
        ("tabs", Box::new(init_tabs)),
        ("engine options", Box::new(init_engine_options)),
        ("demo styles", Box::new(inject_styles)),
        ("responsive previews", Box::new(init_responsive_previews)),
        ("swatches", Box::new(move || swatches::init_swatches(tooltip_ms))),
    ];
    for (name, step) in steps {
        if let Err(err) = step() {
            log::warn!("prototype {name}: not wired: {err:?}");
        }
    }
    start_demo_pulses(config.pulse_interval_ms);
    log::info!("prototype page ready");
}

fn toggle_class_on_hover(element: &Element, class: &'static str) -> Result<(), JsValue> {
    let enter = element.clone();
    dom::listen(element, "mouseenter", move |_: MouseEvent| dom::set_class(&enter, class, true))?;
    let leave = element.clone();
    dom::listen(element, "mouseleave", move |_: MouseEvent| dom::set_class(&leave, class, false))
}

fn init_hover_classes() -> Result<(), JsValue> {
    let document = dom::document()?;
    for selector in [".nav-item", ".search-card, .recommend-card"] {
        for element in dom::select_all(&document, selector)? {
            toggle_class_on_hover(&element, "hover")?;
        }
    }
    Ok(())
}

fn init_search_focus() -> Result<(), JsValue> {
    let document = dom::document()?;
    for input in dom::select_all(&document, ".search-input")? {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let input_el = input.clone();
            dom::listen(&input, event, move |_: Event| {
                if let Ok(Some(search_box)) = input_el.closest(".search-box") {
                    dom::set_class(&search_box, "focused", focused);
                }
            })?;
        }
    }
    Ok(())
}

fn init_menu_toggles() -> Result<(), JsValue> {
    let document = dom::document()?;
    for layout in ["desktop", "tablet", "mobile"] {
        let toggle = document.query_selector(&format!(".{layout}-menu-toggle"))?;
        let menu = document.query_selector(&format!(".{layout}-menu"))?;
        let (Some(toggle), Some(menu)) = (toggle, menu) else {
            continue;
        };
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            let _ = menu.class_list().toggle("show");
        })?;
    }
    Ok(())
}

/// One document-wide tab group.
fn init_tabs() -> Result<(), JsValue> {
    let document = dom::document()?;
    bind_tab_group(
        "prototype tabs",
        dom::select_all(&document, ".tab-item")?,
        dom::select_all(&document, ".tab-content")?,
        document.document_element(),
        PanelSuffix::Tab,
        ClickPolicy::default(),
        Rc::new(|_switch: &TabSwitch| {}),
    )
}

fn init_engine_options() -> Result<(), JsValue> {
    let document = dom::document()?;
    let options = Rc::new(dom::select_all(&document, ".search-engine-option")?);
    for option in options.iter() {
        let options = Rc::clone(&options);
        let selected = option.clone();
        dom::listen(option, "click", move |_: MouseEvent| {
            for other in options.iter() {
                dom::set_active(other, *other == selected);
            }
            let engine = selected.get_attribute("data-engine").unwrap_or_default();
            log::info!("selected search engine: {engine}");
        })?;
    }
    Ok(())
}

/// Demo elements marked `.hover` pulse on their own so the states are visible.
fn start_demo_pulses(period_ms: u32) {
    let Ok(document) = dom::document() else {
        return;
    };
    let demos = [
        (".nav-item.hover", "pulse-effect"),
        (".search-button.hover", "pulse-effect"),
        (".card.hover", "float-effect"),
    ];
    for (selector, class) in demos {
        let Ok(Some(element)) = document.query_selector(selector) else {
            continue;
        };
        Interval::new(period_ms, move || {
            let _ = element.class_list().toggle(class);
        })
        .forget();
    }
}

fn inject_styles() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(head) = document.head() else {
        return Ok(());
    };
    for css in [styles::DEMO_STYLES, styles::RESPONSIVE_STYLES, styles::TOOLTIP_STYLES] {
        let style = document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
    }
    Ok(())
}

/// Device previews collapse and expand when their title is clicked.
fn init_responsive_previews() -> Result<(), JsValue> {
    let document = dom::document()?;
    for container in dom::select_all(&document, ".responsive-container")? {
        let title = container.query_selector("h3")?;
        let view = container.query_selector("div[class$=\"-view\"]")?;
        let (Some(title), Some(view)) = (title, view) else {
            continue;
        };
        let title_text = title.text_content().unwrap_or_default();
        if title_text.trim() == DEFAULT_EXPANDED_VIEW {
            dom::set_class(&view, "expanded", true);
        }
        dom::listen(&title, "click", move |_: MouseEvent| {
            let _ = view.class_list().toggle("expanded");
        })?;
    }
    Ok(())
}
