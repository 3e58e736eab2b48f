//! Root crate facade for the Quire editor toolbar and document list.

pub use quire_core::{
    config, dispatch, document_menu, documents, editor, error, host, toolbar, CommandChain,
    Config, EditorHandle, MemoryEditor, QuireError,
};
pub use quire_gui::run;
