//! Header dropdown menus: keyboard navigation and item clicks.
//!
//! Item listeners are delegated to the `.dropdown-menu` element, so they keep
//! working after the guardian re-injects the menu markup.

use crate::portal::guardian::MENU_SELECTOR;
use crate::shared::dom;
use crate::shared::timers;
use portal_contracts::widgets::dropdown_keys::{item_key_action, opens_menu, ItemKeyAction};
use portal_contracts::InteractionNotifier;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement, HtmlElement, KeyboardEvent, MouseEvent};

const TRIGGER_SELECTOR: &str = ".dropdown-trigger";
const ITEM_SELECTOR: &str = ".dropdown-item";

pub fn show_menu(menu: &Element) {
    dom::set_active(menu, true);
}

pub fn hide_menu(menu: &Element) {
    dom::set_active(menu, false);
}

fn items_of(menu: &Element) -> Vec<HtmlElement> {
    dom::select_all_in(menu, ITEM_SELECTOR)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn focus_first_item(menu: &Element) {
    if let Some(first) = items_of(menu).first() {
        let _ = first.focus();
    }
}

/// Wire every `.nav-dropdown`. Dropdowns missing a trigger or menu are skipped.
pub fn init_dropdowns(
    dropdowns: &[Element],
    check_delay_ms: u32,
    notifier: &Rc<dyn InteractionNotifier>,
) -> Result<(), JsValue> {
    for (index, dropdown) in dropdowns.iter().enumerate() {
        let trigger = dropdown
            .query_selector(TRIGGER_SELECTOR)?
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let menu = dropdown.query_selector(MENU_SELECTOR)?;
        let (Some(trigger), Some(menu)) = (trigger, menu) else {
            log::warn!("dropdown {index} has no trigger or menu, skipped");
            continue;
        };
        bind_trigger_keys(&trigger, &menu)?;
        bind_item_keys(&trigger, &menu)?;
        bind_item_clicks(&menu, check_delay_ms, notifier)?;
    }
    Ok(())
}

fn bind_trigger_keys(trigger: &HtmlElement, menu: &Element) -> Result<(), JsValue> {
    let menu = menu.clone();
    dom::listen(trigger, "keydown", move |ev: KeyboardEvent| {
        if opens_menu(&ev.key()) {
            ev.prevent_default();
            show_menu(&menu);
            focus_first_item(&menu);
        }
    })
}

fn bind_item_keys(trigger: &HtmlElement, menu: &Element) -> Result<(), JsValue> {
    let trigger = trigger.clone();
    let menu_el = menu.clone();
    dom::listen(menu, "keydown", move |ev: KeyboardEvent| {
        let Some(item) = dom::target_element(&ev).and_then(|t| t.closest(ITEM_SELECTOR).ok().flatten()) else {
            return;
        };
        let items = items_of(&menu_el);
        let Some(index) = items.iter().position(|i| **i == item) else {
            return;
        };
        let Some(action) = item_key_action(&ev.key(), index, items.len()) else {
            return;
        };
        if action.prevents_default() {
            ev.prevent_default();
        }
        match action {
            ItemKeyAction::Focus(next) => {
                let _ = items[next].focus();
            }
            ItemKeyAction::CloseAndFocusTrigger => {
                hide_menu(&menu_el);
                let _ = trigger.focus();
            }
            ItemKeyAction::Close => hide_menu(&menu_el),
        }
    })
}

fn bind_item_clicks(
    menu: &Element,
    check_delay_ms: u32,
    notifier: &Rc<dyn InteractionNotifier>,
) -> Result<(), JsValue> {
    let notifier = Rc::clone(notifier);
    dom::listen(menu, "click", move |ev: MouseEvent| {
        let Some(item) = dom::target_element(&ev).and_then(|t| t.closest(ITEM_SELECTOR).ok().flatten()) else {
            return;
        };
        // keep the document-level dismissal away from item clicks
        ev.stop_propagation();

        if let Some(link) = item.dyn_ref::<HtmlAnchorElement>() {
            let href = link.href();
            if link.target() == "_blank" && !href.is_empty() {
                ev.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&href, "_blank");
                }
            }
        }

        let notifier = Rc::clone(&notifier);
        timers::after(check_delay_ms, move || notifier.protect_now());
    })
}
