//! NotifyBridge - host notification-listener bridge
//!
//! This crate bridges the host platform's notification-listener facility to an
//! embedding application runtime: it observes posted notifications, forwards a
//! serialized record of each one across the dispatch boundary, and can send a
//! scripted reply through a notification's existing reply action.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: notification model, wire record, reply resolution, and errors
//! - **Application**: the listener observer, the control surface, and port interfaces (traits)
//! - **Infrastructure**: adapter implementations (channel dispatcher, in-memory host, XDG config)

pub mod application;
pub mod domain;
pub mod infrastructure;
