//! Bottom status bar: pagination state and the latest status message.

use super::super::*;
use eframe::egui;

impl QuireApp {
    /// Renders the bottom status bar.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match self.documents.documents() {
                        Some(rows) => {
                            ui.label(
                                egui::RichText::new(format!("{} documents loaded", rows.len()))
                                    .color(COLOR_TEXT_SECONDARY),
                            );
                        }
                        None => {
                            ui.label(
                                egui::RichText::new("Loading documents...")
                                    .color(COLOR_TEXT_MUTED),
                            );
                        }
                    }
                    ui.separator();
                    let pagination = match self.documents.status() {
                        PaginationStatus::CanLoadMore => "More available",
                        PaginationStatus::LoadingMore => "Loading more...",
                        PaginationStatus::Exhausted => "All loaded",
                    };
                    ui.label(
                        egui::RichText::new(pagination)
                            .small()
                            .color(COLOR_TEXT_MUTED),
                    );
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.label(egui::RichText::new(&status.text).color(COLOR_ACCENT));
                    }
                });
            });
    }
}
