//! Loads [`PortalConfig`] from the page.
//!
//! The page may embed overrides:
//! ```html
//! <script type="application/json" id="portal-config">
//!   { "guardian": { "burst_window_ms": 3000 } }
//! </script>
//! ```

use anyhow::Context;
use portal_contracts::PortalConfig;

pub const CONFIG_ELEMENT_ID: &str = "portal-config";

/// Config embedded in the page, or defaults when absent or broken.
pub fn load_config() -> PortalConfig {
    match read_embedded_config() {
        Ok(Some(config)) => {
            log::info!("portal config loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Ok(None) => PortalConfig::default(),
        Err(err) => {
            log::error!("portal config ignored, using defaults: {err:#}");
            PortalConfig::default()
        }
    }
}

fn read_embedded_config() -> anyhow::Result<Option<PortalConfig>> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(None);
    };
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    parse_config(&text).map(Some)
}

/// Parse the embedded JSON; a blank element means defaults.
pub fn parse_config(text: &str) -> anyhow::Result<PortalConfig> {
    if text.trim().is_empty() {
        return Ok(PortalConfig::default());
    }
    PortalConfig::from_json(text).with_context(|| format!("parse #{CONFIG_ELEMENT_ID}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_means_defaults() {
        assert_eq!(parse_config("  \n").unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(r#"{ "timing": { "scroll_throttle_ms": 250 } }"#).unwrap();
        assert_eq!(config.timing.scroll_throttle_ms, 250);
        assert_eq!(config.timing.resize_debounce_ms, 250);
    }

    #[test]
    fn test_error_names_the_element() {
        let err = parse_config("[1, 2").unwrap_err();
        assert!(format!("{err:#}").contains("#portal-config"));
    }
}
