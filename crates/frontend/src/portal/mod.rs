//! The portal page: one coordinator wiring independent widgets.

pub mod decorators;
pub mod dispatch;
pub mod dropdown;
pub mod globals;
pub mod guardian;
pub mod pagination;
pub mod responsive;
pub mod scroll_spy;
pub mod search;
pub mod sidebar;
pub mod tabs;

use crate::shared::dom;
use guardian::{Guardian, DROPDOWN_SELECTOR};
use portal_contracts::{InteractionNotifier, PortalConfig};
use responsive::Responsive;
use sidebar::MobileSidebar;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

thread_local! {
    // lives as long as the page
    static RUNNING: RefCell<Option<PortalCoordinator>> = const { RefCell::new(None) };
}

/// Owns the configuration and the guardian, and hands the guardian to the
/// widgets as their [`InteractionNotifier`].
pub struct PortalCoordinator {
    config: Rc<PortalConfig>,
    guardian: Rc<Guardian>,
    sidebar: Rc<MobileSidebar>,
}

impl PortalCoordinator {
    /// Snapshot the dropdowns and wire every widget. A widget that fails to
    /// wire is logged and skipped.
    pub fn start(config: PortalConfig) -> Result<(), JsValue> {
        let document = dom::document()?;
        let dropdowns = dom::select_all(&document, DROPDOWN_SELECTOR)?;
        let guardian = Guardian::new(dropdowns, config.guardian.clone());
        let sidebar = MobileSidebar::from_document(config.breakpoints.mobile_px)?;

        let coordinator = Self {
            config: Rc::new(config),
            guardian,
            sidebar,
        };
        coordinator.wire();
        RUNNING.with(|running| *running.borrow_mut() = Some(coordinator));
        Ok(())
    }

    pub fn notifier(&self) -> Rc<dyn InteractionNotifier> {
        self.guardian.clone()
    }

    fn wire(&self) {
        let config = Rc::clone(&self.config);
        let timing = &config.timing;
        let notifier = self.notifier();

        wire_step("mobile sidebar", || self.sidebar.wire(config.gestures.swipe_threshold_px));
        for selector in config.tabs.selectors() {
            wire_step(&selector, || {
                tabs::init_scoped_tabs(&selector, timing.interaction_delay_ms, Rc::clone(&notifier))
            });
        }
        wire_step("sidebar navigation", || {
            sidebar::init_nav_items(&self.sidebar, timing.interaction_delay_ms, &notifier)
        });
        wire_step("scroll spy", || {
            scroll_spy::init_scroll_spy(&config.scroll_spy, timing.scroll_throttle_ms)
        });
        wire_step("center tabs", tabs::init_center_tabs);
        wire_step("search", search::init_search);
        wire_step("cards", || decorators::init_cards(timing.interaction_delay_ms, &notifier));
        wire_step("anchors", decorators::init_smooth_anchors);

        let responsive = Responsive::new(Rc::clone(&self.sidebar), config.breakpoints.clone());
        wire_step("responsive", || responsive::init_responsive(&responsive, &config));
        wire_step("keyboard", || dispatch::init_document_keys(&self.sidebar, &config));

        wire_step("dropdowns", || {
            dropdown::init_dropdowns(
                self.guardian.menus().dropdowns(),
                timing.dropdown_item_check_ms,
                &notifier,
            )
        });
        self.guardian.arm();
        wire_step("window functions", || globals::publish(&self.guardian));
        wire_step("document click", || {
            dispatch::init_document_click(&self.guardian, timing.global_click_delay_ms)
        });

        responsive.apply();
        wire_step("pagination", || pagination::init_pagination(&notifier));
        wire_step("fade-in", decorators::init_fade_in);
        wire_step("lazy images", decorators::init_lazy_images);

        if let Ok(body) = dom::body() {
            dom::set_class(&body, "loaded", true);
        }
        log::info!("portal ready");
    }
}

fn wire_step(name: &str, step: impl FnOnce() -> Result<(), JsValue>) {
    if let Err(err) = step() {
        log::warn!("{name}: not wired: {err:?}");
    }
}
