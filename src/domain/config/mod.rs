//! Bridge configuration module

mod bridge_config;

pub use bridge_config::{BridgeConfig, DEFAULT_DISPATCH_CAPACITY};
