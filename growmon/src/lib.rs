//! GrowMon - Desktop monitor for a networked grow-box controller.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod client;
pub mod message;
pub mod mock;
pub mod poller;
pub mod view;

// Re-export commonly used types
pub use app::GrowMon;
pub use message::Message;
pub use poller::{CycleAction, Poller, PollerError};
