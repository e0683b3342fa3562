//! Viewport-derived values written back into the page.

use crate::shared::config::Breakpoints;

/// Name of the custom property holding 1% of the viewport height.
pub const VH_PROPERTY: &str = "--vh";

/// Value for [`VH_PROPERTY`].
pub fn vh_value(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

/// Minimum card height for the current width.
pub fn card_min_height(width: f64, breakpoints: &Breakpoints) -> &'static str {
    if width <= breakpoints.compact_px {
        "70px"
    } else if width <= breakpoints.mobile_px {
        "80px"
    } else {
        "100px"
    }
}

pub fn is_mobile(width: f64, breakpoints: &Breakpoints) -> bool {
    width <= breakpoints.mobile_px
}

/// Transition for the staggered card fade-in.
pub fn fade_in_transition(index: usize) -> String {
    let delay = index * 100;
    format!("opacity 0.6s ease {delay}ms, transform 0.6s ease {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vh_value() {
        assert_eq!(vh_value(800.0), "8px");
        assert_eq!(vh_value(850.0), "8.5px");
    }

    #[test]
    fn test_card_heights() {
        let bp = Breakpoints::default();
        assert_eq!(card_min_height(320.0, &bp), "70px");
        assert_eq!(card_min_height(576.0, &bp), "70px");
        assert_eq!(card_min_height(700.0, &bp), "80px");
        assert_eq!(card_min_height(1280.0, &bp), "100px");
        assert!(is_mobile(768.0, &bp));
        assert!(!is_mobile(769.0, &bp));
    }

    #[test]
    fn test_fade_in_stagger() {
        assert_eq!(fade_in_transition(0), "opacity 0.6s ease 0ms, transform 0.6s ease 0ms");
        assert_eq!(fade_in_transition(3), "opacity 0.6s ease 300ms, transform 0.6s ease 300ms");
    }
}
