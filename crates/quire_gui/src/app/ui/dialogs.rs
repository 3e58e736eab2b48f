//! Modal windows: document rename/remove confirmation and the image URL prompt.

use super::super::*;
use eframe::egui;
use quire_core::document_menu::PendingAction;
use quire_core::QuireError;
use tracing::debug;

impl QuireApp {
    /// Renders the dialog for the menu with a pending action.
    ///
    /// At most one menu holds a pending action; selecting an entry on another
    /// row goes through [`QuireApp::claim_dialog`].
    pub(crate) fn render_document_dialogs(&mut self, ctx: &egui::Context) {
        let Some(id) = self
            .menus
            .iter()
            .find(|(_, menu)| *menu.pending() != PendingAction::None)
            .map(|(id, _)| id.clone())
        else {
            return;
        };
        let Some(menu) = self.menus.get_mut(&id) else {
            return;
        };

        let renaming = matches!(menu.pending(), PendingAction::Rename { .. });
        let title = if renaming {
            "Rename document"
        } else {
            "Remove document"
        };
        let mut open = true;
        let mut confirm = false;
        let mut cancel = false;

        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if let Some(draft) = menu.rename_draft_mut() {
                    let blank = draft.trim().is_empty();
                    let response = ui.add(
                        egui::TextEdit::singleline(draft)
                            .hint_text("Document name")
                            .desired_width(280.0),
                    );
                    if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
                    {
                        confirm = true;
                    }
                    if blank {
                        ui.label(
                            egui::RichText::new("Name must not be empty")
                                .small()
                                .color(COLOR_INVALID),
                        );
                    }
                } else {
                    ui.label("This document will be removed. This cannot be undone.");
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    let label = if renaming { "Save" } else { "Remove" };
                    if ui.button(label).clicked() {
                        confirm = true;
                    }
                });
            });

        if cancel || !open {
            menu.cancel();
            return;
        }
        if !confirm {
            return;
        }
        if let Some(mutation) = menu.confirm() {
            self.apply_mutation(mutation);
        }
    }

    /// Renders the "insert image by URL" dialog while it is open.
    pub(crate) fn render_image_url_dialog(&mut self, ctx: &egui::Context) {
        if !self.toolbar.image.is_dialog_open() {
            return;
        }
        let mut open = true;
        let mut submit = false;
        let image = &mut self.toolbar.image;

        egui::Window::new("Insert image URL")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(image.url_mut())
                        .hint_text("https://example.com/image.png")
                        .desired_width(320.0),
                );
                if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.add_space(8.0);
                if ui.button("Insert").clicked() {
                    submit = true;
                }
            });

        if !open {
            self.toolbar.image.set_dialog_open(false);
            return;
        }
        if submit {
            match self.toolbar.image.submit_url(editor_mut(&mut self.editor)) {
                Ok(()) => self.set_status("Image inserted"),
                Err(QuireError::EmptyImageSource) => debug!("image url left blank"),
                Err(err) => debug!("image url not applied: {}", err),
            }
        }
    }
}
