use crate::shared::dom;
use crate::shared::timers::Debouncer;
use portal_contracts::shared::config::ScrollSpyConfig;
use portal_contracts::widgets::scroll_spy::{current_section, nav_selector, SectionExtent};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement};

/// Highlights the `.sidebar-item` of the section currently in view.
pub struct ScrollSpy {
    sections: Vec<String>,
    lookahead: f64,
}

impl ScrollSpy {
    pub fn new(config: &ScrollSpyConfig) -> Self {
        Self {
            sections: config.sections.clone(),
            lookahead: config.lookahead_px,
        }
    }

    pub fn update(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        let extents: Vec<SectionExtent<'_>> = self
            .sections
            .iter()
            .filter_map(|id| {
                let el = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
                Some(SectionExtent {
                    id: id.as_str(),
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect();
        let current = current_section(scroll_y, self.lookahead, extents);

        for item in dom::select_all(&document, ".sidebar-item").unwrap_or_default() {
            dom::set_active(&item, false);
        }
        if let Some(id) = current {
            if let Ok(Some(nav)) = document.query_selector(&nav_selector(id)) {
                dom::set_active(&nav, true);
            }
        }
    }
}

pub fn init_scroll_spy(config: &ScrollSpyConfig, throttle_ms: u32) -> Result<(), JsValue> {
    let window = dom::window()?;
    let spy = Rc::new(ScrollSpy::new(config));
    let debouncer = Debouncer::new(throttle_ms);

    let on_scroll = Rc::clone(&spy);
    dom::listen(&window, "scroll", move |_: Event| {
        let spy = Rc::clone(&on_scroll);
        debouncer.call(move || spy.update());
    })?;

    spy.update();
    Ok(())
}
