//! Paged card grids inside tab panels.
//!
//! Markup per pager:
//! ```html
//! <div class="tab-content">
//!   <div class="search-cards" data-page="1">…</div>
//!   <div class="search-cards" data-page="2">…</div>
//!   <div class="pagination-controls">
//!     <button class="prev-btn">‹</button><span class="page-info"></span><button class="next-btn">›</button>
//!   </div>
//! </div>
//! ```

use crate::shared::dom;
use portal_contracts::widgets::pager::Pager;
use portal_contracts::{InteractionNotifier, PortalError};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, MouseEvent};

struct PagerView {
    pager: Cell<Pager>,
    pages: Vec<Element>,
    prev: HtmlButtonElement,
    next: HtmlButtonElement,
    info: Option<Element>,
}

impl PagerView {
    /// The only place that writes pager state to the page.
    fn update(&self) {
        let pager = self.pager.get();
        for (index, page) in self.pages.iter().enumerate() {
            let display = if pager.is_visible(index) { "grid" } else { "none" };
            dom::set_style(page, "display", display);
        }
        if let Some(info) = &self.info {
            info.set_text_content(Some(&pager.label()));
        }
        self.prev.set_disabled(pager.prev_disabled());
        self.next.set_disabled(pager.next_disabled());
    }

    fn step(&self, forward: bool) -> bool {
        let mut pager = self.pager.get();
        let moved = if forward { pager.next() } else { pager.prev() };
        self.pager.set(pager);
        if moved {
            self.update();
            log::debug!("pager moved to {}", pager.label());
        }
        moved
    }
}

/// Order page panels by their numeric `data-page`; unnumbered pages go last.
fn ordered_pages(mut pages: Vec<Element>) -> Vec<Element> {
    pages.sort_by_key(|page| page_index(page.get_attribute("data-page").as_deref()));
    pages
}

fn page_index(attr: Option<&str>) -> u32 {
    attr.and_then(|v| v.trim().parse().ok()).unwrap_or(u32::MAX)
}

fn button(controls: &Element, selector: &str) -> Result<HtmlButtonElement, JsValue> {
    controls
        .query_selector(selector)?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| dom::js_error(PortalError::missing(selector)))
}

fn bind_pager(controls: &Element, notifier: &Rc<dyn InteractionNotifier>) -> Result<(), JsValue> {
    let tab_content = controls
        .closest(".tab-content")?
        .ok_or_else(|| dom::js_error(PortalError::missing(".tab-content")))?;
    let pages = ordered_pages(dom::select_all_in(&tab_content, ".search-cards[data-page]")?);
    let pager = Pager::new(pages.len()).map_err(dom::js_error)?;

    let view = Rc::new(PagerView {
        pager: Cell::new(pager),
        pages,
        prev: button(controls, ".prev-btn")?,
        next: button(controls, ".next-btn")?,
        info: controls.query_selector(".page-info")?,
    });
    view.update();

    for (btn, forward) in [(view.prev.clone(), false), (view.next.clone(), true)] {
        let view = Rc::clone(&view);
        let notifier = Rc::clone(notifier);
        dom::listen(&btn, "click", move |ev: MouseEvent| {
            ev.stop_propagation();
            if view.step(forward) {
                notifier.start_burst();
            }
        })?;
    }
    Ok(())
}

pub fn init_pagination(notifier: &Rc<dyn InteractionNotifier>) -> Result<(), JsValue> {
    let document = dom::document()?;
    for controls in dom::select_all(&document, ".pagination-controls")? {
        if let Err(err) = bind_pager(&controls, notifier) {
            log::warn!("pager skipped: {err:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index() {
        assert_eq!(page_index(Some("2")), 2);
        assert_eq!(page_index(Some(" 10 ")), 10);
        assert_eq!(page_index(Some("x")), u32::MAX);
        assert_eq!(page_index(None), u32::MAX);
    }
}
