//! DOM-free building blocks of the portal page widgets.
//!
//! Everything in this crate is plain Rust state: the frontend crate reads the
//! live page, feeds it into these models and renders their answers back.

pub mod guardian;
pub mod shared;
pub mod widgets;

pub use shared::config::PortalConfig;
pub use shared::error::{PortalError, PortalResult};
pub use shared::notifier::{InteractionNotifier, NoopNotifier};
