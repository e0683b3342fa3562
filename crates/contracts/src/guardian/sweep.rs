use crate::guardian::snapshot::SnapshotCache;

/// The set of dropdown menus a guardian watches, indexed in page order.
pub trait MenuSurface {
    fn menu_count(&self) -> usize;

    /// Number of child elements of menu `index`; `None` when the dropdown
    /// has no menu element at all.
    fn child_count(&self, index: usize) -> Option<u32>;

    fn inner_html(&self, index: usize) -> Option<String>;

    /// Replace the content of menu `index` with `markup`.
    fn restore(&self, index: usize, markup: &str);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub recovered: Vec<usize>,
}

impl SweepOutcome {
    pub fn recovered_count(&self) -> usize {
        self.recovered.len()
    }
}

/// One integrity pass: every empty menu with a usable snapshot is restored.
pub fn sweep<S: MenuSurface + ?Sized>(surface: &S, cache: &SnapshotCache) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    for index in 0..surface.menu_count() {
        if surface.child_count(index) != Some(0) {
            continue;
        }
        let Some(markup) = cache.restorable(index) else {
            continue;
        };
        log::warn!("dropdown menu {index} lost its content, restoring");
        surface.restore(index, markup);
        outcome.recovered.push(index);
    }
    if !outcome.recovered.is_empty() {
        log::info!("guardian sweep restored {} dropdown menu(s)", outcome.recovered_count());
    }
    outcome
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub healthy: usize,
    pub total: usize,
}

impl HealthReport {
    /// Rounded share of healthy menus. A page without dropdowns counts as 100%.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.healthy as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy == self.total
    }
}

impl std::fmt::Display for HealthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.healthy, self.total, self.percent())
    }
}

/// Observe how many menus currently have content. Never modifies the surface.
pub fn health<S: MenuSurface + ?Sized>(surface: &S) -> HealthReport {
    let total = surface.menu_count();
    let healthy = (0..total)
        .filter(|i| surface.child_count(*i).is_some_and(|n| n > 0))
        .count();
    HealthReport { healthy, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory menus: `None` is a dropdown without a menu element.
    struct FakeMenus {
        menus: RefCell<Vec<Option<String>>>,
        writes: RefCell<u32>,
    }

    impl FakeMenus {
        fn new(menus: &[Option<&str>]) -> Self {
            Self {
                menus: RefCell::new(menus.iter().map(|m| m.map(str::to_string)).collect()),
                writes: RefCell::new(0),
            }
        }

        fn clear(&self, index: usize) {
            if let Some(Some(html)) = self.menus.borrow_mut().get_mut(index) {
                html.clear();
            }
        }

        fn html(&self, index: usize) -> Option<String> {
            self.menus.borrow()[index].clone()
        }
    }

    impl MenuSurface for FakeMenus {
        fn menu_count(&self) -> usize {
            self.menus.borrow().len()
        }

        fn child_count(&self, index: usize) -> Option<u32> {
            let menus = self.menus.borrow();
            let html = menus.get(index)?.as_ref()?;
            Some(html.matches("<a").count() as u32)
        }

        fn inner_html(&self, index: usize) -> Option<String> {
            self.menus.borrow().get(index)?.clone()
        }

        fn restore(&self, index: usize, markup: &str) {
            *self.writes.borrow_mut() += 1;
            self.menus.borrow_mut()[index] = Some(markup.to_string());
        }
    }

    const MAIL: &str = r#"<a class="dropdown-item" href="https://mail.qq.com">QQ</a><a class="dropdown-item" href="https://mail.163.com">163</a>"#;
    const DISK: &str = r#"<a class="dropdown-item" href="https://pan.baidu.com">Baidu</a>"#;

    #[test]
    fn test_sweep_is_noop_when_healthy() {
        let menus = FakeMenus::new(&[Some(MAIL), Some(DISK)]);
        let cache = SnapshotCache::capture(&menus);

        let outcome = sweep(&menus, &cache);
        assert_eq!(outcome.recovered_count(), 0);
        assert_eq!(*menus.writes.borrow(), 0);
        assert_eq!(menus.html(0).as_deref(), Some(MAIL));
    }

    #[test]
    fn test_cleared_menu_is_restored_byte_identical() {
        let menus = FakeMenus::new(&[Some(MAIL), Some(DISK)]);
        let cache = SnapshotCache::capture(&menus);

        menus.clear(1);
        assert_eq!(health(&menus).healthy, 1);

        let outcome = sweep(&menus, &cache);
        assert_eq!(outcome.recovered, vec![1]);
        assert_eq!(menus.html(1).as_deref(), Some(DISK));
        assert!(health(&menus).is_healthy());
    }

    #[test]
    fn test_missing_menus_are_skipped() {
        let menus = FakeMenus::new(&[None, Some(DISK)]);
        let cache = SnapshotCache::capture(&menus);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(0), None);

        let outcome = sweep(&menus, &cache);
        assert_eq!(outcome.recovered_count(), 0);
        assert_eq!(health(&menus), HealthReport { healthy: 1, total: 2 });
    }

    #[test]
    fn test_blank_snapshot_is_never_reinjected() {
        let menus = FakeMenus::new(&[Some("  ")]);
        let cache = SnapshotCache::capture(&menus);

        let outcome = sweep(&menus, &cache);
        assert!(outcome.recovered.is_empty());
        assert_eq!(*menus.writes.borrow(), 0);
    }

    #[test]
    fn test_health_percent() {
        assert_eq!(HealthReport { healthy: 2, total: 3 }.percent(), 67);
        assert_eq!(HealthReport { healthy: 0, total: 0 }.percent(), 100);
        assert_eq!(HealthReport { healthy: 3, total: 3 }.to_string(), "3/3 (100%)");
    }
}
