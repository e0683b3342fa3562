//! Capability handed to widgets that want the dropdown guardian to react to
//! user interaction.

/// Hooks a widget may call after it mutated the page.
///
/// Widgets receive this as an injected dependency; when no guardian is
/// running they get [`NoopNotifier`].
pub trait InteractionNotifier {
    /// Run one integrity sweep right now.
    fn protect_now(&self);

    /// Switch the guardian into burst mode for its configured window.
    fn start_burst(&self);
}

/// Notifier that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl InteractionNotifier for NoopNotifier {
    fn protect_now(&self) {}

    fn start_burst(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        sweeps: Cell<u32>,
        bursts: Cell<u32>,
    }

    impl InteractionNotifier for Counting {
        fn protect_now(&self) {
            self.sweeps.set(self.sweeps.get() + 1);
        }

        fn start_burst(&self) {
            self.bursts.set(self.bursts.get() + 1);
        }
    }

    #[test]
    fn test_notifier_is_object_safe() {
        let counting = Counting {
            sweeps: Cell::new(0),
            bursts: Cell::new(0),
        };
        let notifiers: Vec<&dyn InteractionNotifier> = vec![&NoopNotifier, &counting];
        for n in &notifiers {
            n.protect_now();
            n.start_burst();
            n.start_burst();
        }
        assert_eq!(counting.sweeps.get(), 1);
        assert_eq!(counting.bursts.get(), 2);
    }
}
