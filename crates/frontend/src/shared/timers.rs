use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use portal_contracts::InteractionNotifier;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

/// Ask the guardian for a burst once the current click has settled.
pub fn burst_after(ms: u32, notifier: &Rc<dyn InteractionNotifier>) {
    let notifier = Rc::clone(notifier);
    after(ms, move || notifier.start_burst());
}

/// Trailing-edge limiter: only the last call inside the window runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        // dropping the previous Timeout clears it
        let previous = self.pending.replace(Some(Timeout::new(self.delay_ms, f)));
        drop(previous);
    }
}
