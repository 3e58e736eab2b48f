//! Backend worker wiring for the desktop shell.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread. The worker owns the document store and stands in
//! for the data-fetching layer behind the document table.

mod protocol;
mod worker;

pub use protocol::{DocCmd, DocEvent};
pub use worker::{spawn_backend, BackendHandle};
