//! Cosmetic behaviour: card hover and fade-in, lazy images, smooth anchors.

use crate::portal::sidebar::scroll_to_anchor;
use crate::shared::dom;
use crate::shared::timers;
use portal_contracts::widgets::viewport::fade_in_transition;
use portal_contracts::InteractionNotifier;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};

pub const CARD_SELECTOR: &str = ".card, .recommend-card, .search-card";
const HOVER_TRANSFORM: &str = "translateY(-5px) scale(1.02)";
const CLICK_GUARD_ATTR: &str = "data-click-protected";

fn on_next_frame(f: impl FnOnce() + 'static) {
    if let Some(window) = web_sys::window() {
        let callback = Closure::once_into_js(f);
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }
}

/// Hover lift on every card, and a guardian burst after a card click.
pub fn init_cards(delay_ms: u32, notifier: &Rc<dyn InteractionNotifier>) -> Result<(), JsValue> {
    let document = dom::document()?;
    for card in dom::select_all(&document, CARD_SELECTOR)? {
        let enter = card.clone();
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            let card = enter.clone();
            on_next_frame(move || dom::set_style(&card, "transform", HOVER_TRANSFORM));
        })?;
        let leave = card.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            let card = leave.clone();
            on_next_frame(move || dom::clear_style(&card, "transform"));
        })?;

        if card.has_attribute(CLICK_GUARD_ATTR) {
            continue;
        }
        card.set_attribute(CLICK_GUARD_ATTR, "true")?;
        let notifier = Rc::clone(notifier);
        dom::listen(&card, "click", move |_: MouseEvent| {
            timers::burst_after(delay_ms, &notifier);
        })?;
    }
    Ok(())
}

fn observer(
    init: &IntersectionObserverInit,
    mut on_visible: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
    callback.forget();
    Ok(observer)
}

/// Cards start transparent and slide in, staggered, when they enter the viewport.
pub fn init_fade_in() -> Result<(), JsValue> {
    let document = dom::document()?;
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -50px 0px");

    let fade = observer(&init, |target, _| {
        dom::set_style(&target, "opacity", "1");
        dom::set_style(&target, "transform", "translateY(0)");
        dom::set_class(&target, "animated", true);
    })?;

    for (index, card) in dom::select_all(&document, CARD_SELECTOR)?.iter().enumerate() {
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", "translateY(20px)");
        dom::set_style(card, "transition", &fade_in_transition(index));
        fade.observe(card);
    }
    Ok(())
}

/// `<img data-src>` gets its real source once it becomes visible.
pub fn init_lazy_images() -> Result<(), JsValue> {
    let document = dom::document()?;
    let images = dom::select_all(&document, "img[data-src]")?;
    if images.is_empty() {
        return Ok(());
    }

    let lazy = observer(&IntersectionObserverInit::new(), |img, observer| {
        if let Some(src) = img.get_attribute("data-src") {
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute("data-src");
        }
        observer.unobserve(&img);
    })?;
    for img in &images {
        lazy.observe(img);
    }
    log::debug!("lazy loading {} images", images.len());
    Ok(())
}

/// In-page `#` links scroll smoothly. Sidebar entries do this in their own
/// click handler.
pub fn init_smooth_anchors() -> Result<(), JsValue> {
    let document = dom::document()?;
    for anchor in dom::select_all(&document, "a[href^=\"#\"]")? {
        if dom::has_class(&anchor, "sidebar-item") || dom::has_class(&anchor, "mobile-sidebar-item") {
            continue;
        }
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: Event| {
            ev.prevent_default();
            scroll_to_anchor(&link);
        })?;
    }
    Ok(())
}
