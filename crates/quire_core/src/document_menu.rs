//! Per-row document menu: open in new tab, rename, remove.
//!
//! Rename and remove do not call into dialogs directly. Selecting them stores a
//! [`PendingAction`] on the menu, and the shell renders the matching dialog
//! while one is pending.

use crate::documents::DocumentId;
use crate::toolbar::Dropdown;
use tracing::debug;

/// The three mutually exclusive menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenInNewTab,
    Rename,
    Remove,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [
        MenuAction::OpenInNewTab,
        MenuAction::Rename,
        MenuAction::Remove,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OpenInNewTab => "Open in new tab",
            Self::Rename => "Rename",
            Self::Remove => "Remove",
        }
    }
}

/// Dialog waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingAction {
    #[default]
    None,
    Rename {
        id: DocumentId,
        draft: String,
    },
    Remove {
        id: DocumentId,
    },
}

/// How a click inside the menu interacts with its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDisposition {
    /// Whether the click reaches the enclosing row (which would open the document).
    pub propagate: bool,
    /// Whether the selection hands off to a pending dialog instead of
    /// completing here. The shell then shows that menu's dialog and drops any
    /// other pending one. The dropdown is closed either way.
    pub prevent_default: bool,
}

/// Confirmed change for the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMutation {
    Rename { id: DocumentId, title: String },
    Remove { id: DocumentId },
}

/// Menu state for one document row.
#[derive(Debug, Clone)]
pub struct DocumentMenu {
    id: DocumentId,
    title: String,
    dropdown: Dropdown,
    pending: PendingAction,
}

impl DocumentMenu {
    pub fn new(id: DocumentId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            dropdown: Dropdown::default(),
            pending: PendingAction::None,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    pub fn pending(&self) -> &PendingAction {
        &self.pending
    }

    /// Keeps the title used to seed rename drafts in sync with the row.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Handles selection of a menu entry.
    ///
    /// `on_new_tab` is only called for [`MenuAction::OpenInNewTab`].
    pub fn select<F>(&mut self, action: MenuAction, on_new_tab: F) -> EventDisposition
    where
        F: FnOnce(&DocumentId),
    {
        debug!(id = %self.id, ?action, "document menu selection");
        match action {
            MenuAction::OpenInNewTab => {
                on_new_tab(&self.id);
                self.dropdown.close();
                EventDisposition {
                    propagate: false,
                    prevent_default: false,
                }
            }
            MenuAction::Rename => {
                self.pending = PendingAction::Rename {
                    id: self.id.clone(),
                    draft: self.title.clone(),
                };
                self.dropdown.close();
                EventDisposition {
                    propagate: false,
                    prevent_default: true,
                }
            }
            MenuAction::Remove => {
                self.pending = PendingAction::Remove {
                    id: self.id.clone(),
                };
                self.dropdown.close();
                EventDisposition {
                    propagate: false,
                    prevent_default: true,
                }
            }
        }
    }

    /// Mutable access to the rename draft while a rename is pending.
    pub fn rename_draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.pending {
            PendingAction::Rename { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Confirms the pending dialog.
    ///
    /// # Returns
    /// The mutation to send, or `None` when nothing is pending or the rename
    /// draft is blank (the dialog then stays open).
    pub fn confirm(&mut self) -> Option<DocumentMutation> {
        let mutation = match &self.pending {
            PendingAction::None => return None,
            PendingAction::Rename { id, draft } => {
                let title = draft.trim();
                if title.is_empty() {
                    return None;
                }
                DocumentMutation::Rename {
                    id: id.clone(),
                    title: title.to_string(),
                }
            }
            PendingAction::Remove { id } => DocumentMutation::Remove { id: id.clone() },
        };
        self.pending = PendingAction::None;
        Some(mutation)
    }

    pub fn cancel(&mut self) {
        self.pending = PendingAction::None;
    }
}
