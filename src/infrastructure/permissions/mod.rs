//! Listener permission adapters

mod memory;

pub use memory::InMemoryPermissionGate;
