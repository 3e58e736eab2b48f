//! Core library for Quire: editor capabilities, toolbar controls, and the
//! document list models shared by every front end.

/// Configuration loading and defaults.
pub mod config;
/// Document menu actions and the pending rename/remove dialog state.
pub mod document_menu;
/// Document rows, pagination, the table model, and the in-memory store.
pub mod documents;
/// Editor capability trait, command chains, and the in-memory editor.
pub mod editor;
/// Application error types.
pub mod error;
/// Host environment actions (print, new tab, file picking).
pub mod host;
/// Toolbar controls that translate gestures into editor command chains.
pub mod toolbar;

pub use config::Config;
pub use editor::{dispatch, CommandChain, EditorHandle, MemoryEditor};
pub use error::QuireError;
