//! Dropdown content guardian.
//!
//! A snapshot of every menu is taken once; sweeps compare the live menus with
//! it and re-inject the cached markup into any menu that lost its children.

pub mod schedule;
pub mod snapshot;
pub mod sweep;

pub use schedule::{BurstPlan, PollMode, PollSchedule};
pub use snapshot::SnapshotCache;
pub use sweep::{health, sweep, HealthReport, MenuSurface, SweepOutcome};
