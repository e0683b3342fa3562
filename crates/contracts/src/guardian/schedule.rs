//! Poll cadence of the guardian: idle, slow background polling, and short
//! fast-polling bursts after user interaction.
//!
//! The schedule only decides; the caller owns the actual timers. Each burst
//! gets a generation number so a late expiry of an older burst cannot end a
//! newer one.

use crate::shared::config::GuardianTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    Idle,
    SlowPoll,
    FastPoll,
}

/// What the caller must do to enter burst mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstPlan {
    pub generation: u64,
    pub period_ms: u32,
    /// Schedule `end_burst(generation)` after this long
    pub window_ms: u32,
    /// A burst was already running; its fast timer must be cancelled first
    pub replaces_previous: bool,
}

#[derive(Debug, Clone)]
pub struct PollSchedule {
    timing: GuardianTiming,
    slow_running: bool,
    burst: Option<u64>,
    next_generation: u64,
}

impl PollSchedule {
    pub fn new(timing: GuardianTiming) -> Self {
        Self {
            timing,
            slow_running: false,
            burst: None,
            next_generation: 1,
        }
    }

    pub fn timing(&self) -> &GuardianTiming {
        &self.timing
    }

    pub fn mode(&self) -> PollMode {
        if self.burst.is_some() {
            PollMode::FastPoll
        } else if self.slow_running {
            PollMode::SlowPoll
        } else {
            PollMode::Idle
        }
    }

    /// Begin background polling. Returns the slow period the first time only.
    pub fn start(&mut self) -> Option<u32> {
        if self.slow_running {
            return None;
        }
        self.slow_running = true;
        Some(self.timing.slow_interval_ms)
    }

    /// Enter (or restart) burst mode.
    pub fn begin_burst(&mut self) -> BurstPlan {
        let generation = self.next_generation;
        self.next_generation += 1;
        let replaces_previous = self.burst.replace(generation).is_some();
        BurstPlan {
            generation,
            period_ms: self.timing.fast_interval_ms,
            window_ms: self.timing.burst_window_ms,
            replaces_previous,
        }
    }

    /// Burst window of `generation` elapsed. Returns true when that burst was
    /// still the current one and the fast timer must now be cancelled.
    pub fn end_burst(&mut self, generation: u64) -> bool {
        if self.burst == Some(generation) {
            self.burst = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> PollSchedule {
        PollSchedule::new(GuardianTiming::default())
    }

    #[test]
    fn test_idle_to_slow() {
        let mut s = schedule();
        assert_eq!(s.mode(), PollMode::Idle);
        assert_eq!(s.start(), Some(1000));
        assert_eq!(s.mode(), PollMode::SlowPoll);
        assert_eq!(s.start(), None);
    }

    #[test]
    fn test_burst_reverts_to_slow() {
        let mut s = schedule();
        s.start();
        let plan = s.begin_burst();
        assert_eq!(plan.period_ms, 100);
        assert_eq!(plan.window_ms, 5000);
        assert!(!plan.replaces_previous);
        assert_eq!(s.mode(), PollMode::FastPoll);

        assert!(s.end_burst(plan.generation));
        assert_eq!(s.mode(), PollMode::SlowPoll);
    }

    #[test]
    fn test_restart_cancels_instead_of_stacking() {
        let mut s = schedule();
        s.start();
        let first = s.begin_burst();
        let second = s.begin_burst();
        assert!(second.replaces_previous);
        assert_ne!(first.generation, second.generation);

        // the first window elapses while the second burst is running
        assert!(!s.end_burst(first.generation));
        assert_eq!(s.mode(), PollMode::FastPoll);

        assert!(s.end_burst(second.generation));
        assert_eq!(s.mode(), PollMode::SlowPoll);
        assert!(!s.end_burst(second.generation));
    }

    #[test]
    fn test_burst_without_background_polling_returns_to_idle() {
        let mut s = schedule();
        let plan = s.begin_burst();
        assert_eq!(s.mode(), PollMode::FastPoll);
        assert!(s.end_burst(plan.generation));
        assert_eq!(s.mode(), PollMode::Idle);
    }
}
