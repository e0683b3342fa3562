//! Page configuration.
//!
//! Every value has a default matching the shipped page, so an absent or
//! partial JSON document is always usable:
//!
//! ```json
//! { "guardian": { "fast_interval_ms": 200 }, "tabs": { "areas": ["tools"] } }
//! ```

use crate::shared::error::{PortalError, PortalResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct PortalConfig {
    pub breakpoints: Breakpoints,
    pub gestures: Gestures,
    pub guardian: GuardianTiming,
    pub timing: Timing,
    pub scroll_spy: ScrollSpyConfig,
    pub tabs: TabAreas,
    pub prototype: PrototypeConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Breakpoints {
    /// At or below this width the page uses the mobile sidebar
    pub mobile_px: f64,
    /// At or below this width cards use the smallest layout
    pub compact_px: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_px: 768.0,
            compact_px: 576.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Gestures {
    pub swipe_threshold_px: f64,
}

impl Default for Gestures {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
        }
    }
}

/// Cadences of the dropdown guardian.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GuardianTiming {
    pub slow_interval_ms: u32,
    pub fast_interval_ms: u32,
    pub burst_window_ms: u32,
    pub health_interval_ms: u32,
    pub initial_health_delay_ms: u32,
}

impl Default for GuardianTiming {
    fn default() -> Self {
        Self {
            slow_interval_ms: 1000,
            fast_interval_ms: 100,
            burst_window_ms: 5000,
            health_interval_ms: 30_000,
            initial_health_delay_ms: 2000,
        }
    }
}

/// Delays and throttles used by the event wiring.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Timing {
    /// Delay between a widget click and the guardian burst it requests
    pub interaction_delay_ms: u32,
    pub dropdown_item_check_ms: u32,
    pub global_click_delay_ms: u32,
    pub scroll_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    pub orientation_delay_ms: u32,
    pub focus_scroll_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            interaction_delay_ms: 50,
            dropdown_item_check_ms: 100,
            global_click_delay_ms: 100,
            scroll_throttle_ms: 100,
            resize_debounce_ms: 250,
            orientation_delay_ms: 500,
            focus_scroll_delay_ms: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScrollSpyConfig {
    pub lookahead_px: f64,
    /// Section element ids, in page order
    pub sections: Vec<String>,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        let sections = [
            "welfare",
            "recommend",
            "programming",
            "tools",
            "movies",
            "software",
            "links",
        ];
        Self {
            lookahead_px: 100.0,
            sections: sections.iter().map(|s| format!("section-{s}")).collect(),
        }
    }
}

/// Values of `data-area` that carry an independent tab group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TabAreas {
    pub areas: Vec<String>,
}

impl Default for TabAreas {
    fn default() -> Self {
        Self {
            areas: ["programming", "tools", "movies", "software"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TabAreas {
    pub fn selectors(&self) -> impl Iterator<Item = String> + '_ {
        self.areas.iter().map(|area| format!("[data-area=\"{area}\"]"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PrototypeConfig {
    pub pulse_interval_ms: u32,
    pub tooltip_ms: u32,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            pulse_interval_ms: 1500,
            tooltip_ms: 1500,
        }
    }
}

impl PortalConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> PortalResult<Self> {
        let config: PortalConfig = serde_json::from_str(json)
            .map_err(|err| PortalError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PortalResult<()> {
        let g = &self.guardian;
        let intervals = [
            ("guardian.slow_interval_ms", g.slow_interval_ms),
            ("guardian.fast_interval_ms", g.fast_interval_ms),
            ("guardian.health_interval_ms", g.health_interval_ms),
            ("prototype.pulse_interval_ms", self.prototype.pulse_interval_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(PortalError::InvalidConfig(format!("{name} must be positive")));
        }
        if g.fast_interval_ms >= g.slow_interval_ms {
            return Err(PortalError::InvalidConfig(format!(
                "guardian.fast_interval_ms ({}) must be below slow_interval_ms ({})",
                g.fast_interval_ms, g.slow_interval_ms
            )));
        }
        if self.breakpoints.compact_px > self.breakpoints.mobile_px {
            return Err(PortalError::InvalidConfig(
                "breakpoints.compact_px must not exceed mobile_px".to_string(),
            ));
        }
        if self.gestures.swipe_threshold_px < 0.0 {
            return Err(PortalError::InvalidConfig(
                "gestures.swipe_threshold_px must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PortalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scroll_spy.sections.len(), 7);
        assert_eq!(config.scroll_spy.sections[0], "section-welfare");
        assert_eq!(config.guardian.burst_window_ms, 5000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PortalConfig::from_json(r#"{ "guardian": { "fast_interval_ms": 200 } }"#).unwrap();
        assert_eq!(config.guardian.fast_interval_ms, 200);
        assert_eq!(config.guardian.slow_interval_ms, 1000);
        assert_eq!(config.breakpoints.mobile_px, 768.0);
        assert_eq!(config.tabs.areas.len(), 4);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = PortalConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PortalError::InvalidConfig(_)));
    }

    #[test]
    fn test_fast_interval_must_be_below_slow() {
        let err = PortalConfig::from_json(
            r#"{ "guardian": { "fast_interval_ms": 1000, "slow_interval_ms": 1000 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fast_interval_ms"));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = PortalConfig::from_json(r#"{ "guardian": { "health_interval_ms": 0 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            PortalError::InvalidConfig("guardian.health_interval_ms must be positive".into())
        );
    }

    #[test]
    fn test_area_selectors() {
        let areas = TabAreas {
            areas: vec!["tools".into()],
        };
        let selectors: Vec<String> = areas.selectors().collect();
        assert_eq!(selectors, vec![r#"[data-area="tools"]"#.to_string()]);
    }

    #[test]
    fn test_compact_above_mobile_is_rejected() {
        let err = PortalConfig::from_json(r#"{ "breakpoints": { "compact_px": 900 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            PortalError::InvalidConfig("breakpoints.compact_px must not exceed mobile_px".into())
        );
    }

    #[test]
    fn test_negative_swipe_threshold_is_rejected() {
        let err = PortalConfig::from_json(r#"{ "gestures": { "swipe_threshold_px": -1 } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            PortalError::InvalidConfig("gestures.swipe_threshold_px must not be negative".into())
        );
    }
}
