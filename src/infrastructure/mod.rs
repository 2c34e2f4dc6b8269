//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the channel
//! dispatcher, in-memory host shims, and the XDG config store.

pub mod config;
pub mod dispatch;
pub mod host;
pub mod permissions;

// Re-export adapters
pub use config::XdgConfigStore;
pub use dispatch::{ChannelDispatcher, NoOpDispatcher};
pub use host::InMemoryHost;
pub use permissions::InMemoryPermissionGate;
