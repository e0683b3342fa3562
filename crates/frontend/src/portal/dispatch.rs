//! The single document-level click and keydown listeners.
//!
//! Steps run in the order written here; nothing else listens for these
//! events on `document`.

use crate::portal::decorators::CARD_SELECTOR;
use crate::portal::dropdown::hide_menu;
use crate::portal::guardian::Guardian;
use crate::portal::sidebar::MobileSidebar;
use crate::shared::dom;
use crate::shared::timers;
use portal_contracts::widgets::sidebar::SidebarTrigger;
use portal_contracts::PortalConfig;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{KeyboardEvent, MouseEvent, Node, ScrollLogicalPosition};

const EXTERNAL_LINK_SELECTOR: &str = "a[target=\"_blank\"]";

pub fn init_document_click(guardian: &Rc<Guardian>, delay_ms: u32) -> Result<(), JsValue> {
    let document = dom::document()?;
    let guardian = Rc::clone(guardian);

    dom::listen(&document, "click", move |ev: MouseEvent| {
        let target = dom::target_element(&ev);
        let target_node = target.as_ref().map(|t| t.unchecked_ref::<Node>());

        // 1. click-outside dismissal
        let menus = guardian.menus();
        for (index, dropdown) in menus.dropdowns().iter().enumerate() {
            if dropdown.contains(target_node) {
                continue;
            }
            if let Some(menu) = menus.menu(index) {
                hide_menu(&menu);
            }
        }

        // 2. cards and external links may reshuffle the layout
        let Some(target) = target else {
            return;
        };
        let hits = |selector: &str| target.closest(selector).ok().flatten().is_some();
        if hits(CARD_SELECTOR) || hits(EXTERNAL_LINK_SELECTOR) {
            let guardian = Rc::clone(&guardian);
            timers::after(delay_ms, move || {
                guardian.protect();
                guardian.begin_burst();
            });
        }
    })
}

pub fn init_document_keys(sidebar: &Rc<MobileSidebar>, config: &PortalConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let sidebar = Rc::clone(sidebar);
    let focus_delay = config.timing.focus_scroll_delay_ms;

    dom::listen(&document, "keydown", move |ev: KeyboardEvent| match ev.key().as_str() {
        "Escape" => sidebar.handle(SidebarTrigger::Escape),
        "Tab" => timers::after(focus_delay, || {
            let focused = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element());
            if let Some(focused) = focused {
                dom::scroll_into_view(&focused, ScrollLogicalPosition::Nearest, None);
            }
        }),
        _ => {}
    })
}
