//! Mobile off-canvas sidebar and its overlay.

use crate::shared::dom;
use crate::shared::timers;
use portal_contracts::widgets::sidebar::{SidebarCommand, SidebarState, SidebarTrigger, SwipeTracker, TouchPoint};
use portal_contracts::InteractionNotifier;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollLogicalPosition, TouchEvent};

pub struct MobileSidebar {
    panel: Option<Element>,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
    state: Cell<SidebarState>,
    breakpoint: f64,
}

impl MobileSidebar {
    pub fn from_document(breakpoint: f64) -> Result<Rc<Self>, JsValue> {
        let document = dom::document()?;
        let panel = document.query_selector(".mobile-sidebar")?;
        let overlay = document.query_selector(".mobile-sidebar-overlay")?;
        if panel.is_none() {
            log::warn!("mobile sidebar not found, sidebar triggers are inert");
        }
        let state = SidebarState::default();
        Ok(Rc::new(Self {
            panel,
            overlay,
            body: document.body(),
            state: Cell::new(state),
            breakpoint,
        }))
    }

    /// Feed a trigger at the current viewport width.
    pub fn handle(&self, trigger: SidebarTrigger) {
        let width = web_sys::window()
            .map(|w| dom::viewport_width(&w))
            .unwrap_or(0.0);
        let mut state = self.state.get();
        let command = state.handle(trigger, width, self.breakpoint);
        self.state.set(state);
        if let Some(command) = command {
            log::debug!("sidebar {trigger:?} -> {command:?}");
            self.render(command);
        }
    }

    fn render(&self, command: SidebarCommand) {
        let open = command == SidebarCommand::Open;
        for element in self.panel.iter().chain(self.overlay.iter()) {
            dom::set_active(element, open);
        }
        if let Some(body) = &self.body {
            if open {
                let _ = body.style().set_property("overflow", "hidden");
            } else {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    /// Hamburger, close button, overlay and swipe gestures.
    pub fn wire(self: &Rc<Self>, swipe_threshold: f64) -> Result<(), JsValue> {
        let document = dom::document()?;

        let triggers = [
            (".mobile-menu-toggle", SidebarTrigger::Hamburger),
            (".mobile-sidebar-close", SidebarTrigger::CloseButton),
            (".mobile-sidebar-overlay", SidebarTrigger::Overlay),
        ];
        for (selector, trigger) in triggers {
            let Some(element) = document.query_selector(selector)? else {
                continue;
            };
            let sidebar = Rc::clone(self);
            dom::listen(&element, "click", move |_: MouseEvent| sidebar.handle(trigger))?;
        }

        let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

        let start = Rc::clone(&tracker);
        dom::listen_passive(&document, "touchstart", move |ev: TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let point = TouchPoint::new(touch.client_x() as f64, touch.client_y() as f64);
                start.borrow_mut().begin(point);
            }
        })?;

        let sidebar = Rc::clone(self);
        dom::listen_passive(&document, "touchend", move |ev: TouchEvent| {
            let Some(touch) = ev.changed_touches().get(0) else {
                return;
            };
            let end = TouchPoint::new(touch.client_x() as f64, touch.client_y() as f64);
            let swipe = tracker.borrow_mut().finish(end, swipe_threshold);
            if let Some(direction) = swipe {
                sidebar.handle(SidebarTrigger::Swipe(direction));
            }
        })?;

        Ok(())
    }
}

/// Desktop `.sidebar-item` and mobile `.mobile-sidebar-item` navigation.
///
/// Each group keeps one active item. A click scrolls to the linked section,
/// closes the mobile sidebar for mobile items and requests a guardian burst.
pub fn init_nav_items(
    sidebar: &Rc<MobileSidebar>,
    delay_ms: u32,
    notifier: &Rc<dyn InteractionNotifier>,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    for (selector, closes_sidebar) in [(".sidebar-item", false), (".mobile-sidebar-item", true)] {
        let items = Rc::new(dom::select_all(&document, selector)?);
        for item in items.iter() {
            let items = Rc::clone(&items);
            let item_el = item.clone();
            let sidebar = Rc::clone(sidebar);
            let notifier = Rc::clone(notifier);
            dom::listen(item, "click", move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();

                for other in items.iter() {
                    dom::set_active(other, *other == item_el);
                }
                scroll_to_anchor(&item_el);
                if closes_sidebar {
                    sidebar.handle(SidebarTrigger::NavItem);
                }
                timers::burst_after(delay_ms, &notifier);
            })?;
        }
    }
    Ok(())
}

/// Scroll to the element named by an in-page `href="#id"`.
pub fn scroll_to_anchor(link: &Element) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        dom::scroll_into_view(&target, ScrollLogicalPosition::Start, None);
    }
}
