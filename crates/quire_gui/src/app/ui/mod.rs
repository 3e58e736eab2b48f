//! UI panel modules extracted from the main app update loop.

/// Rename/remove confirmation windows and the image URL dialog.
pub(super) mod dialogs;
/// Per-row document menu cell.
pub(super) mod document_menu;
/// Paginated document table side panel.
pub(super) mod documents_table;
/// Central editor surface summary.
pub(super) mod editor_panel;
/// Anchored popup used by every dropdown.
pub(super) mod popup;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Transient toast notifications.
pub(super) mod toasts;
/// Formatting toolbar.
pub(super) mod toolbar;
