//! Mutually exclusive tab buttons and the panels they reveal.

use crate::shared::error::PortalError;

/// How a tab key maps to its panel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSuffix {
    /// `<key>-tab`, used by the region tab groups
    Tab,
    /// `<key>-content`, used by the center search area
    Content,
}

impl PanelSuffix {
    pub fn panel_id(self, key: &str) -> String {
        match self {
            PanelSuffix::Tab => format!("{key}-tab"),
            PanelSuffix::Content => format!("{key}-content"),
        }
    }
}

/// Result of selecting a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitch {
    pub tab: usize,
    pub target_id: String,
    /// `None` when no panel in the group carries `target_id`
    pub panel: Option<usize>,
}

impl TabSwitch {
    /// `#<target_id>`, for looking the target up outside the known panels.
    pub fn target_selector(&self) -> String {
        format!("#{}", self.target_id)
    }

    /// Error describing the unresolved target, if no panel matched.
    pub fn missing_target(&self) -> Option<PortalError> {
        match self.panel {
            Some(_) => None,
            None => Some(PortalError::missing(self.target_selector())),
        }
    }
}

/// One tab group, scoped to a single container.
///
/// Buttons are identified by their `data-tab` key, panels by their element id.
#[derive(Debug, Clone)]
pub struct TabGroup {
    keys: Vec<String>,
    panel_ids: Vec<String>,
    suffix: PanelSuffix,
    active_tab: Option<usize>,
    active_panel: Option<usize>,
}

impl TabGroup {
    pub fn new(keys: Vec<String>, panel_ids: Vec<String>, suffix: PanelSuffix) -> Self {
        Self {
            keys,
            panel_ids,
            suffix,
            active_tab: None,
            active_panel: None,
        }
    }

    /// Adopt the selection the markup shipped with.
    pub fn with_initial(mut self, tab: Option<usize>, panel: Option<usize>) -> Self {
        self.active_tab = tab.filter(|i| *i < self.keys.len());
        self.active_panel = panel.filter(|i| *i < self.panel_ids.len());
        self
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn panel_count(&self) -> usize {
        self.panel_ids.len()
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.active_tab
    }

    pub fn active_panel(&self) -> Option<usize> {
        self.active_panel
    }

    pub fn is_tab_active(&self, index: usize) -> bool {
        self.active_tab == Some(index)
    }

    pub fn is_panel_active(&self, index: usize) -> bool {
        self.active_panel == Some(index)
    }

    /// Select the tab at `index`. Out-of-range indexes leave the group untouched.
    pub fn select(&mut self, index: usize) -> Option<TabSwitch> {
        let key = self.keys.get(index)?;
        let target_id = self.suffix.panel_id(key);
        let panel = self.panel_ids.iter().position(|id| *id == target_id);

        self.active_tab = Some(index);
        self.active_panel = panel;
        Some(TabSwitch {
            tab: index,
            target_id,
            panel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(area: &str, n: usize) -> TabGroup {
        let keys: Vec<String> = (1..=n).map(|i| format!("{area}{i}")).collect();
        let panels = keys.iter().map(|k| format!("{k}-tab")).collect();
        TabGroup::new(keys, panels, PanelSuffix::Tab).with_initial(Some(0), Some(0))
    }

    fn active_counts(g: &TabGroup) -> (usize, usize) {
        let tabs = (0..g.len()).filter(|i| g.is_tab_active(*i)).count();
        let panels = (0..g.panel_count()).filter(|i| g.is_panel_active(*i)).count();
        (tabs, panels)
    }

    #[test]
    fn test_click_two_then_one() {
        let mut tools = group("tools", 3);
        tools.select(1).unwrap();
        let switch = tools.select(0).unwrap();

        assert_eq!(switch.target_id, "tools1-tab");
        assert!(tools.is_panel_active(0));
        assert!(!tools.is_panel_active(1));
        assert!(!tools.is_panel_active(2));
    }

    #[test]
    fn test_one_active_pair_per_group_across_clicks() {
        let mut tools = group("tools", 3);
        let mut movies = group("movies", 2);
        movies.select(1).unwrap();

        for i in [2, 0, 1, 1, 2] {
            tools.select(i).unwrap();
            assert_eq!(active_counts(&tools), (1, 1));
        }
        assert_eq!(movies.active_tab(), Some(1));
        assert_eq!(movies.active_panel(), Some(1));
    }

    #[test]
    fn test_missing_panel_still_activates_button() {
        let mut g = TabGroup::new(
            vec!["a".into(), "b".into()],
            vec!["a-tab".into()],
            PanelSuffix::Tab,
        )
        .with_initial(Some(0), Some(0));

        let switch = g.select(1).unwrap();
        assert_eq!(switch.panel, None);
        assert_eq!(switch.target_selector(), "#b-tab");
        assert_eq!(
            switch.missing_target(),
            Some(PortalError::MissingElement("#b-tab".to_string()))
        );
        assert_eq!(g.active_tab(), Some(1));
        assert_eq!(active_counts(&g), (1, 0));
    }

    #[test]
    fn test_content_suffix() {
        let mut g = TabGroup::new(
            vec!["jobs".into()],
            vec!["jobs-content".into()],
            PanelSuffix::Content,
        );
        assert_eq!(g.active_tab(), None);
        let switch = g.select(0).unwrap();
        assert_eq!(switch.panel, Some(0));
        assert_eq!(switch.missing_target(), None);
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut g = group("x", 2);
        assert!(g.select(5).is_none());
        assert_eq!(g.active_tab(), Some(0));
    }
}
