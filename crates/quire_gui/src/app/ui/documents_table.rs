//! Paginated document table with the load-more control.

use super::super::*;
use super::document_menu::document_menu_cell;
use eframe::egui::{self, RichText};
use quire_core::documents::{LoadMoreLabel, TableBody, EMPTY_MESSAGE, TABLE_COLUMNS};

impl QuireApp {
    /// Renders the document list side panel.
    pub(crate) fn render_documents_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("documents")
            .default_width(460.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading(RichText::new("Documents").color(COLOR_TEXT_PRIMARY));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.new_document_title)
                            .hint_text("Untitled document")
                            .desired_width(200.0),
                    );
                    let entered = response.lost_focus()
                        && ui.input(|input| input.key_pressed(egui::Key::Enter));
                    if ui.button("+ New document").clicked() || entered {
                        self.create_document();
                    }
                });
                ui.separator();

                let mut open_row = None;
                let mut dialog_row = None;
                let mut load_more = false;
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let body = self.table.body(self.documents.documents());
                        if body.shows_loading() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("Loading documents...")
                                        .color(COLOR_TEXT_MUTED),
                                );
                            });
                            return;
                        }

                        egui::Grid::new("documents_table")
                            .num_columns(TABLE_COLUMNS.len())
                            .striped(true)
                            .spacing([16.0, 8.0])
                            .show(ui, |ui| {
                                for column in TABLE_COLUMNS {
                                    ui.label(RichText::new(column).small().color(COLOR_TEXT_MUTED));
                                }
                                ui.end_row();

                                match body {
                                    TableBody::Rows(rows) => {
                                        for row in rows {
                                            let selected =
                                                self.open_document.as_ref() == Some(&row.id);
                                            if ui
                                                .selectable_label(selected, row.title.as_str())
                                                .clicked()
                                            {
                                                open_row = Some(row.id.clone());
                                            }
                                            match self.menus.get_mut(&row.id) {
                                                Some(menu) => {
                                                    if let Some(disposition) = document_menu_cell(
                                                        ui,
                                                        menu,
                                                        &mut self.host,
                                                        &self.config.document_base_url,
                                                    ) {
                                                        if disposition.propagate {
                                                            open_row = Some(row.id.clone());
                                                        }
                                                        if disposition.prevent_default {
                                                            dialog_row = Some(row.id.clone());
                                                        }
                                                    }
                                                }
                                                None => {
                                                    ui.label("");
                                                }
                                            }
                                            ui.label(row.sharing_label());
                                            ui.label(
                                                RichText::new(row.created_label())
                                                    .color(COLOR_TEXT_SECONDARY),
                                            );
                                            ui.end_row();
                                        }
                                    }
                                    TableBody::Empty => {
                                        ui.label(
                                            RichText::new(EMPTY_MESSAGE).color(COLOR_TEXT_MUTED),
                                        );
                                        ui.end_row();
                                    }
                                    TableBody::Loading => {}
                                }
                            });

                        ui.add_space(8.0);
                        let control = self.table.load_more_control(self.documents.status());
                        ui.vertical_centered(|ui| match control.label {
                            LoadMoreLabel::Text(text) => {
                                if ui
                                    .add_enabled(control.enabled, egui::Button::new(text))
                                    .clicked()
                                {
                                    load_more = true;
                                }
                            }
                            LoadMoreLabel::Spinner => {
                                ui.spinner();
                            }
                        });
                    });

                if let Some(id) = dialog_row {
                    self.claim_dialog(&id);
                }
                if load_more {
                    self.load_more();
                }
                if let Some(id) = open_row {
                    self.open_document(id);
                }
            });
    }
}
