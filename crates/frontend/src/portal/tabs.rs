//! Tab groups: region groups scoped to a `[data-area]` container and the
//! center search tabs.

use crate::shared::dom;
use crate::shared::timers;
use portal_contracts::widgets::tab_group::{PanelSuffix, TabGroup, TabSwitch};
use portal_contracts::{InteractionNotifier, PortalError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Element, MouseEvent};

/// How a tab click treats the browser event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickPolicy {
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

/// Wire `buttons` and `panels` as one exclusive group. `on_switch` runs after
/// the active markers were updated.
///
/// A target id that names none of `panels` is looked up inside `scope`; the
/// element found there is marked active until the next switch.
pub fn bind_tab_group(
    label: &str,
    buttons: Vec<Element>,
    panels: Vec<Element>,
    scope: Option<Element>,
    suffix: PanelSuffix,
    policy: ClickPolicy,
    on_switch: Rc<dyn Fn(&TabSwitch)>,
) -> Result<(), JsValue> {
    let keys = buttons
        .iter()
        .map(|b| b.get_attribute("data-tab").unwrap_or_default())
        .collect();
    let ids = panels.iter().map(|p| p.id()).collect();
    let initial_tab = buttons.iter().position(|b| dom::has_class(b, dom::ACTIVE));
    let initial_panel = panels.iter().position(|p| dom::has_class(p, dom::ACTIVE));
    let group = TabGroup::new(keys, ids, suffix).with_initial(initial_tab, initial_panel);

    log::debug!(
        "tab group {label}: {} tabs, {} panels",
        group.len(),
        group.panel_count()
    );

    let group = Rc::new(RefCell::new(group));
    let buttons = Rc::new(buttons);
    let panels = Rc::new(panels);
    let label: Rc<str> = Rc::from(label);
    let scope = Rc::new(scope);
    let stray: Rc<RefCell<Option<Element>>> = Rc::new(RefCell::new(None));

    for (index, button) in buttons.iter().enumerate() {
        let group = Rc::clone(&group);
        let buttons = Rc::clone(&buttons);
        let panels = Rc::clone(&panels);
        let label = Rc::clone(&label);
        let on_switch = Rc::clone(&on_switch);
        let scope = Rc::clone(&scope);
        let stray = Rc::clone(&stray);

        dom::listen(button, "click", move |ev: MouseEvent| {
            if policy.stop_propagation {
                ev.stop_propagation();
            }
            if policy.prevent_default {
                ev.prevent_default();
            }

            let Some(switch) = group.borrow_mut().select(index) else {
                return;
            };
            render(&group.borrow(), &buttons, &panels);
            if let Some(previous) = stray.borrow_mut().take() {
                dom::set_active(&previous, false);
            }

            match switch.missing_target() {
                None => log::debug!("{label}: switched to {}", switch.target_selector()),
                Some(err) => match find_in_scope((*scope).as_ref(), &switch) {
                    Some(target) => {
                        dom::set_active(&target, true);
                        log::debug!("{label}: switched to {}", switch.target_selector());
                        stray.replace(Some(target));
                    }
                    None => log::error!("{label}: tab target unresolved, {err}"),
                },
            }
            on_switch(&switch);
        })?;
    }
    Ok(())
}

fn find_in_scope(scope: Option<&Element>, switch: &TabSwitch) -> Option<Element> {
    scope?.query_selector(&switch.target_selector()).ok().flatten()
}

fn render(group: &TabGroup, buttons: &[Element], panels: &[Element]) {
    for (i, button) in buttons.iter().enumerate() {
        dom::set_active(button, group.is_tab_active(i));
    }
    for (i, panel) in panels.iter().enumerate() {
        dom::set_active(panel, group.is_panel_active(i));
    }
}

/// Tab group confined to the container matched by `container_selector`.
/// Every switch requests a guardian burst after `delay_ms`.
pub fn init_scoped_tabs(
    container_selector: &str,
    delay_ms: u32,
    notifier: Rc<dyn InteractionNotifier>,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(container) = document.query_selector(container_selector)? else {
        log::warn!("tab group skipped: {}", PortalError::missing(container_selector));
        return Ok(());
    };

    let buttons = dom::select_all_in(&container, ".tab-item")?;
    let panels = dom::select_all_in(&container, ".tab-content")?;
    let policy = ClickPolicy {
        stop_propagation: true,
        prevent_default: false,
    };

    bind_tab_group(
        container_selector,
        buttons,
        panels,
        Some(container),
        PanelSuffix::Tab,
        policy,
        Rc::new(move |_switch: &TabSwitch| timers::burst_after(delay_ms, &notifier)),
    )
}

/// Tabs of the center search area. Panels are limited to `.center-tab-area`.
pub fn init_center_tabs() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(area) = document.query_selector(".center-tab-area")? else {
        log::warn!("center tabs skipped: {}", PortalError::missing(".center-tab-area"));
        return Ok(());
    };

    let buttons = dom::select_all(&document, ".center-tab-item")?;
    let panels = dom::select_all_in(&area, ".tab-content")?;
    // visibility follows the active class only
    for panel in &panels {
        dom::clear_style(panel, "display");
    }

    let policy = ClickPolicy {
        stop_propagation: false,
        prevent_default: true,
    };
    bind_tab_group(
        "center tabs",
        buttons,
        panels,
        None,
        PanelSuffix::Content,
        policy,
        Rc::new(|_switch: &TabSwitch| {}),
    )
}
