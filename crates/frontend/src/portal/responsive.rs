//! Resize and orientation handling, and the `--vh` custom property.

use crate::portal::sidebar::MobileSidebar;
use crate::shared::dom;
use crate::shared::timers::{self, Debouncer};
use portal_contracts::shared::config::Breakpoints;
use portal_contracts::widgets::sidebar::SidebarTrigger;
use portal_contracts::widgets::viewport::{card_min_height, is_mobile, vh_value, VH_PROPERTY};
use portal_contracts::PortalConfig;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, ScrollLogicalPosition};

pub struct Responsive {
    sidebar: Rc<MobileSidebar>,
    breakpoints: Breakpoints,
}

impl Responsive {
    pub fn new(sidebar: Rc<MobileSidebar>, breakpoints: Breakpoints) -> Rc<Self> {
        Rc::new(Self {
            sidebar,
            breakpoints,
        })
    }

    /// Bring the layout in line with the current viewport width.
    pub fn apply(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let width = dom::viewport_width(&window);

        self.sidebar.handle(SidebarTrigger::Resize);

        if is_mobile(width, &self.breakpoints) {
            let active_tab = document
                .query_selector(".center-tabs .center-tab-item.active")
                .ok()
                .flatten();
            if let Some(tab) = active_tab {
                dom::scroll_into_view(&tab, ScrollLogicalPosition::Nearest, Some(ScrollLogicalPosition::Center));
            }
        }

        let min_height = card_min_height(width, &self.breakpoints);
        for card in dom::select_all(&document, ".card").unwrap_or_default() {
            dom::set_style(&card, "min-height", min_height);
        }
        log::debug!("viewport width {width}px");
    }
}

/// Write `--vh` on the document root.
pub fn update_viewport_height() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let value = vh_value(dom::viewport_height(&window));
        let _ = root.style().set_property(VH_PROPERTY, &value);
    }
}

pub fn init_responsive(responsive: &Rc<Responsive>, config: &PortalConfig) -> Result<(), JsValue> {
    let window = dom::window()?;

    let debouncer = Debouncer::new(config.timing.resize_debounce_ms);
    let on_resize = Rc::clone(responsive);
    dom::listen(&window, "resize", move |_: Event| {
        let responsive = Rc::clone(&on_resize);
        debouncer.call(move || {
            responsive.apply();
            update_viewport_height();
        });
    })?;

    let orientation_delay = config.timing.orientation_delay_ms;
    let on_rotate = Rc::clone(responsive);
    dom::listen(&window, "orientationchange", move |_: Event| {
        let responsive = Rc::clone(&on_rotate);
        timers::after(orientation_delay, move || {
            responsive.apply();
            update_viewport_height();
        });
    })?;

    update_viewport_height();
    Ok(())
}
