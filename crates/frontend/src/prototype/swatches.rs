//! Colour swatches of the style guide section: click copies the colour.

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::dom;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};

#[component]
fn CopiedTooltip() -> impl IntoView {
    view! { <div class="color-tooltip">"颜色已复制!"</div> }
}

/// Show the tooltip inside `swatch` for `duration_ms`.
fn flash_tooltip(swatch: HtmlElement, duration_ms: u32) {
    let handle = leptos::mount::mount_to(swatch, CopiedTooltip);
    // dropping the handle unmounts the tooltip
    Timeout::new(duration_ms, move || drop(handle)).forget();
}

pub fn init_swatches(tooltip_ms: u32) -> Result<(), JsValue> {
    let document = dom::document()?;
    let window = dom::window()?;

    for swatch in dom::select_all(&document, ".color-swatch")? {
        let Ok(swatch) = swatch.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = swatch.clone();
        let window = window.clone();
        dom::listen(&swatch, "click", move |_: MouseEvent| {
            let color = window
                .get_computed_style(&target)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("background-color").ok())
                .unwrap_or_default();
            if color.is_empty() {
                return;
            }
            log::debug!("copying swatch colour {color}");
            let target = target.clone();
            copy_to_clipboard_with_callback(&color, move || flash_tooltip(target, tooltip_ms));
        })?;
    }
    Ok(())
}
