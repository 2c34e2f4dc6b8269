//! Notification host adapters

mod memory;

pub use memory::InMemoryHost;
