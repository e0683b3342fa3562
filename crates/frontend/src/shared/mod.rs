pub mod clipboard;
pub mod config;
pub mod dom;
pub mod timers;
