use crate::guardian::sweep::MenuSurface;
use std::collections::BTreeMap;

/// Markup of each dropdown menu as captured at start-up. Read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SnapshotCache {
    entries: BTreeMap<usize, String>,
}

impl SnapshotCache {
    /// Capture every menu the surface currently exposes. Dropdowns without a
    /// menu element get no entry.
    pub fn capture<S: MenuSurface + ?Sized>(surface: &S) -> Self {
        let entries = (0..surface.menu_count())
            .filter_map(|index| surface.inner_html(index).map(|html| (index, html)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    /// Markup worth restoring: present and not blank.
    pub fn restorable(&self, index: usize) -> Option<&str> {
        self.get(index).filter(|html| !html.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
