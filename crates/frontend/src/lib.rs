pub mod portal;
pub mod prototype;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Which page the module was loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Portal,
    Prototype,
}

impl PageKind {
    /// Read from `<body data-page="...">`; anything but `prototype` is the portal.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("prototype") => PageKind::Prototype,
            _ => PageKind::Portal,
        }
    }
}

fn boot() {
    let config = shared::config::load_config();
    let kind = PageKind::from_attr(
        shared::dom::body()
            .ok()
            .and_then(|b| b.get_attribute("data-page"))
            .as_deref(),
    );
    log::info!("starting {kind:?} page");

    match kind {
        PageKind::Prototype => prototype::start(&config.prototype),
        PageKind::Portal => {
            if let Err(err) = portal::PortalCoordinator::start(config) {
                log::error!("portal failed to start: {err:?}");
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = shared::dom::when_ready(boot) {
        log::error!("page scripts not started: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_kind() {
        assert_eq!(PageKind::from_attr(Some("prototype")), PageKind::Prototype);
        assert_eq!(PageKind::from_attr(Some(" prototype ")), PageKind::Prototype);
        assert_eq!(PageKind::from_attr(Some("home")), PageKind::Portal);
        assert_eq!(PageKind::from_attr(None), PageKind::Portal);
    }
}
