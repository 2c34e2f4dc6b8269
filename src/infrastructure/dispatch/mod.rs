//! Dispatch boundary adapters
//!
//! The channel dispatcher hands envelopes to the application's task handler;
//! the no-op dispatcher stands in when no handler is wired.

mod channel;
mod noop;

pub use channel::ChannelDispatcher;
pub use noop::NoOpDispatcher;
