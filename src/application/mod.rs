//! Application layer - Use cases and port interfaces
//!
//! Contains the bridge's operations and trait definitions
//! for external system interactions.

pub mod control;
pub mod observer;
pub mod ports;

// Re-export use cases
pub use control::{empty_observer_slot, ControlSurface, ObserverSlot};
pub use observer::ListenerObserver;
