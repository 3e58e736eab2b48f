//! Central editor surface.

use super::super::*;
use eframe::egui::{self, RichText};

const IMAGE_SOURCE_PREVIEW_CHARS: usize = 64;

fn preview_source(source: &str) -> String {
    if source.chars().count() <= IMAGE_SOURCE_PREVIEW_CHARS {
        return source.to_string();
    }
    let head: String = source.chars().take(IMAGE_SOURCE_PREVIEW_CHARS).collect();
    format!("{}...", head)
}

impl QuireApp {
    /// Renders the open document and the editor's formatting state.
    pub(crate) fn render_editor_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let title = self
                .open_document
                .as_ref()
                .and_then(|id| self.documents.find(id))
                .map(|row| row.title.as_str())
                .unwrap_or("Untitled");
            ui.heading(RichText::new(title).color(COLOR_TEXT_PRIMARY));
            ui.separator();

            let Some(editor) = &self.editor else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Starting editor...").color(COLOR_TEXT_MUTED));
                });
                return;
            };

            egui::Grid::new("editor_state")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Formatting").color(COLOR_TEXT_MUTED));
                    ui.label(editor.describe());
                    ui.end_row();

                    ui.label(RichText::new("Spellcheck").color(COLOR_TEXT_MUTED));
                    let spellcheck = match editor.spellcheck() {
                        Some(false) => "off",
                        _ => "on",
                    };
                    ui.label(spellcheck);
                    ui.end_row();

                    ui.label(RichText::new("Focus").color(COLOR_TEXT_MUTED));
                    ui.label(if editor.is_focused() {
                        "focused"
                    } else {
                        "blurred"
                    });
                    ui.end_row();

                    ui.label(RichText::new("Commands run").color(COLOR_TEXT_MUTED));
                    ui.label(editor.executed_count().to_string());
                    ui.end_row();
                });

            if !editor.images().is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("Images").strong());
                for source in editor.images() {
                    ui.add(
                        egui::Label::new(
                            RichText::new(preview_source(source))
                                .small()
                                .monospace()
                                .color(COLOR_TEXT_SECONDARY),
                        )
                        .truncate(),
                    );
                }
            }
        });
    }
}
