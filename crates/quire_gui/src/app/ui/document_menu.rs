//! Per-row document menu cell.

use super::popup::show_popup;
use eframe::egui;
use quire_core::document_menu::{DocumentMenu, EventDisposition, MenuAction};
use quire_core::documents::document_url;
use quire_core::host::HostActions;

/// Renders the menu trigger and its actions for one row.
///
/// # Returns
/// The disposition of the entry chosen this frame, or `None` when nothing was
/// selected.
pub(crate) fn document_menu_cell(
    ui: &mut egui::Ui,
    menu: &mut DocumentMenu,
    host: &mut dyn HostActions,
    base_url: &str,
) -> Option<EventDisposition> {
    let trigger = ui.button("...").on_hover_text("Document actions");
    if trigger.clicked() {
        menu.dropdown_mut().toggle();
    }
    let popup = show_popup(
        ui,
        "document_menu",
        &trigger,
        menu.dropdown().is_open(),
        |ui| {
            let mut chosen = None;
            for action in MenuAction::ALL {
                if ui.button(action.label()).clicked() {
                    chosen = Some(action);
                }
            }
            chosen
        },
    );
    if popup.dismissed {
        menu.dropdown_mut().close();
    }
    let action = popup.inner.flatten()?;
    Some(menu.select(action, |id| {
        host.open_in_new_tab(&document_url(base_url, id));
    }))
}
