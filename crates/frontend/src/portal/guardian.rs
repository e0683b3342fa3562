//! Keeps the header dropdown menus populated.
//!
//! Something on the page occasionally empties `.dropdown-menu` elements. The
//! guardian snapshots every menu at start-up and re-injects the snapshot into
//! any menu found without children: every `slow_interval_ms` in the
//! background, and every `fast_interval_ms` during a burst that follows user
//! interaction.

use gloo_timers::callback::{Interval, Timeout};
use portal_contracts::guardian::{health, sweep, HealthReport, MenuSurface, PollSchedule, SnapshotCache, SweepOutcome};
use portal_contracts::shared::config::GuardianTiming;
use portal_contracts::InteractionNotifier;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys::Element;

pub const DROPDOWN_SELECTOR: &str = ".nav-dropdown";
pub const MENU_SELECTOR: &str = ".dropdown-menu";

/// Live `.nav-dropdown` containers. The menu inside each one is looked up on
/// every access.
pub struct DropdownMenus {
    dropdowns: Vec<Element>,
}

impl DropdownMenus {
    pub fn new(dropdowns: Vec<Element>) -> Self {
        Self { dropdowns }
    }

    pub fn dropdowns(&self) -> &[Element] {
        &self.dropdowns
    }

    pub fn menu(&self, index: usize) -> Option<Element> {
        self.dropdowns
            .get(index)?
            .query_selector(MENU_SELECTOR)
            .ok()
            .flatten()
    }
}

impl MenuSurface for DropdownMenus {
    fn menu_count(&self) -> usize {
        self.dropdowns.len()
    }

    fn child_count(&self, index: usize) -> Option<u32> {
        self.menu(index).map(|menu| menu.child_element_count())
    }

    fn inner_html(&self, index: usize) -> Option<String> {
        self.menu(index).map(|menu| menu.inner_html())
    }

    fn restore(&self, index: usize, markup: &str) {
        if let Some(menu) = self.menu(index) {
            menu.set_inner_html(markup);
        }
    }
}

pub struct Guardian {
    me: Weak<Guardian>,
    menus: DropdownMenus,
    cache: SnapshotCache,
    schedule: RefCell<PollSchedule>,
    slow: RefCell<Option<Interval>>,
    fast: RefCell<Option<Interval>>,
    burst_expiry: RefCell<Option<Timeout>>,
    health_probe: RefCell<Option<Interval>>,
    recovered_total: Cell<usize>,
}

impl Guardian {
    /// Snapshot the menus now. Nothing is scheduled until [`Guardian::arm`].
    pub fn new(dropdowns: Vec<Element>, timing: GuardianTiming) -> Rc<Self> {
        let menus = DropdownMenus::new(dropdowns);
        let cache = SnapshotCache::capture(&menus);
        log::info!(
            "guardian: captured {} of {} dropdown menus",
            cache.len(),
            menus.menu_count()
        );
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            menus,
            cache,
            schedule: RefCell::new(PollSchedule::new(timing)),
            slow: RefCell::new(None),
            fast: RefCell::new(None),
            burst_expiry: RefCell::new(None),
            health_probe: RefCell::new(None),
            recovered_total: Cell::new(0),
        })
    }

    pub fn menus(&self) -> &DropdownMenus {
        &self.menus
    }

    /// Start background polling and the periodic health probe.
    pub fn arm(&self) {
        let (slow_period, timing) = {
            let mut schedule = self.schedule.borrow_mut();
            (schedule.start(), schedule.timing().clone())
        };
        let Some(slow_period) = slow_period else {
            return;
        };

        let me = self.me.clone();
        *self.slow.borrow_mut() = Some(Interval::new(slow_period, move || {
            if let Some(guardian) = me.upgrade() {
                guardian.protect();
            }
        }));

        let me = self.me.clone();
        *self.health_probe.borrow_mut() = Some(Interval::new(timing.health_interval_ms, move || {
            if let Some(guardian) = me.upgrade() {
                guardian.report_health();
            }
        }));

        let me = self.me.clone();
        Timeout::new(timing.initial_health_delay_ms, move || {
            if let Some(guardian) = me.upgrade() {
                guardian.report_health();
            }
        })
        .forget();

        log::info!(
            "guardian armed: sweep every {}ms, burst {}ms for {}ms",
            slow_period,
            timing.fast_interval_ms,
            timing.burst_window_ms
        );
    }

    /// One sweep over all menus.
    pub fn protect(&self) -> SweepOutcome {
        let outcome = sweep(&self.menus, &self.cache);
        if !outcome.recovered.is_empty() {
            self.recovered_total
                .set(self.recovered_total.get() + outcome.recovered_count());
        }
        outcome
    }

    /// Fast polling for the burst window. A running burst is cancelled and
    /// replaced, never stacked.
    pub fn begin_burst(&self) {
        let plan = self.schedule.borrow_mut().begin_burst();
        if plan.replaces_previous {
            log::debug!("guardian: restarting burst (generation {})", plan.generation);
        }

        let me = self.me.clone();
        let fast = Interval::new(plan.period_ms, move || {
            if let Some(guardian) = me.upgrade() {
                guardian.protect();
            }
        });
        // replacing the handles drops, and thereby cancels, the previous burst
        self.fast.replace(Some(fast));

        let me = self.me.clone();
        let generation = plan.generation;
        let expiry = Timeout::new(plan.window_ms, move || {
            if let Some(guardian) = me.upgrade() {
                guardian.end_burst(generation);
            }
        });
        self.burst_expiry.replace(Some(expiry));
    }

    fn end_burst(&self, generation: u64) {
        if self.schedule.borrow_mut().end_burst(generation) {
            self.fast.replace(None);
            log::debug!("guardian: burst {generation} ended");
        }
    }

    pub fn report_health(&self) -> HealthReport {
        let report = health(&self.menus);
        log::info!(
            "dropdown health: {report}, {} restored so far",
            self.recovered_total.get()
        );
        report
    }
}

impl InteractionNotifier for Guardian {
    fn protect_now(&self) {
        self.protect();
    }

    fn start_burst(&self) {
        self.begin_burst();
    }
}
