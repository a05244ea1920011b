//! Backend worker wiring for the desktop client.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread. The worker owns the blocking HTTP client so the
//! `update` loop never blocks on the network.

mod protocol;
mod worker;

pub use protocol::{ClientCmd, ClientEvent};
pub use worker::{spawn_backend, BackendHandle};
