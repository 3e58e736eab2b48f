//! Link dropdown with an inline URL field.

use super::Dropdown;
use crate::editor::{
    attr, dispatch, read_attribute, CommandChain, EditorCommand, EditorHandle, MarkType,
};

/// Link dropdown state: open flag plus the URL being typed.
#[derive(Debug, Clone, Default)]
pub struct LinkControl {
    dropdown: Dropdown,
    value: String,
}

impl LinkControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    /// Trigger click. Opening seeds the field with the link at the selection.
    pub fn toggle(&mut self, editor: Option<&dyn EditorHandle>) {
        self.dropdown.toggle();
        if self.dropdown.is_open() {
            self.value = read_attribute(editor, MarkType::Link, attr::HREF).unwrap_or_default();
        }
    }

    /// Applies the typed URL to the link mark around the selection, then
    /// clears the field and closes.
    pub fn apply(&mut self, editor: Option<&mut dyn EditorHandle>) -> bool {
        let href = std::mem::take(&mut self.value);
        self.dropdown.close();
        dispatch(
            editor,
            CommandChain::focused()
                .then(EditorCommand::ExtendMarkRange(MarkType::Link))
                .then(EditorCommand::SetLink { href }),
        )
    }
}
