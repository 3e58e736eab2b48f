//! Formatting toolbar rendered from the fixed toolbar layout.

use super::super::*;
use super::popup::{option_dropdown, show_popup};
use eframe::egui::{self, RichText};
use quire_core::editor::{query_active, ActiveQuery, MarkType};
use quire_core::toolbar::{
    apply_font_family, current_align, current_font_family, current_font_size,
    current_heading_label, font_family_selected, format_hex, parse_hex, ColorControl,
    ColorTarget, ToolbarButton, ToolbarItem, ALIGN_OPTIONS, FONT_FAMILIES, HEADING_OPTIONS,
    LINE_HEIGHT_OPTIONS, LIST_OPTIONS, TEXT_COLOR_PALETTE, TOOLBAR_LAYOUT,
};
use tracing::debug;

const PALETTE_COLUMNS: usize = 6;
const SWATCH_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSource {
    Upload,
    Url,
}

fn color_slot(toolbar: &mut Toolbar, target: ColorTarget) -> &mut ColorControl {
    match target {
        ColorTarget::Text => &mut toolbar.text_color,
        ColorTarget::Highlight => &mut toolbar.highlight,
    }
}

impl QuireApp {
    /// Renders the toolbar strip in layout order.
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for item in TOOLBAR_LAYOUT {
                        match *item {
                            ToolbarItem::Button(button) => self.toolbar_button(ui, button),
                            ToolbarItem::Separator => {
                                ui.separator();
                            }
                            ToolbarItem::FontFamily => self.font_family_control(ui),
                            ToolbarItem::HeadingLevel => self.heading_control(ui),
                            ToolbarItem::FontSize => self.font_size_control(ui),
                            ToolbarItem::TextColor => self.color_control(ui, ColorTarget::Text),
                            ToolbarItem::HighlightColor => {
                                self.color_control(ui, ColorTarget::Highlight)
                            }
                            ToolbarItem::Link => self.link_control(ui),
                            ToolbarItem::Image => self.image_control(ui),
                            ToolbarItem::Align => self.align_control(ui),
                            ToolbarItem::LineHeight => self.line_height_control(ui),
                            ToolbarItem::List => self.list_control(ui),
                        }
                    }
                });
            });
    }

    fn toolbar_button(&mut self, ui: &mut egui::Ui, button: ToolbarButton) {
        let view = editor_ref(&self.editor);
        let selected = match button {
            ToolbarButton::Spellcheck => view
                .map(|editor| editor.spellcheck() != Some(false))
                .unwrap_or(false),
            other => other.is_active(view),
        };
        let enabled = match button {
            ToolbarButton::Undo => self.editor.as_ref().is_some_and(MemoryEditor::can_undo),
            ToolbarButton::Redo => self.editor.as_ref().is_some_and(MemoryEditor::can_redo),
            _ => true,
        };
        let response = ui
            .add_enabled(enabled, egui::Button::new(button.label()).selected(selected))
            .on_hover_text(button.label());
        if !response.clicked() {
            return;
        }
        button.click(editor_mut(&mut self.editor), &mut self.host);
        if button == ToolbarButton::Print {
            self.set_status("Printing is not available in the desktop app");
        }
    }

    fn font_family_control(&mut self, ui: &mut egui::Ui) {
        let editor = &self.editor;
        let chosen = option_dropdown(
            ui,
            "font_family",
            current_font_family(editor_ref(editor)),
            &mut self.toolbar.font_family,
            FONT_FAMILIES,
            |(label, _)| RichText::new(*label),
            |(_, value)| font_family_selected(editor_ref(editor), value),
        );
        if let Some((_, value)) = chosen {
            apply_font_family(editor_mut(&mut self.editor), value);
        }
    }

    fn heading_control(&mut self, ui: &mut egui::Ui) {
        let editor = &self.editor;
        let chosen = option_dropdown(
            ui,
            "heading",
            current_heading_label(editor_ref(editor)),
            &mut self.toolbar.heading,
            &HEADING_OPTIONS,
            |option| RichText::new(option.label).size(option.font_size_px()),
            |option| option.option_highlighted(editor_ref(editor)),
        );
        if let Some(option) = chosen {
            option.apply(editor_mut(&mut self.editor));
        }
    }

    fn font_size_control(&mut self, ui: &mut egui::Ui) {
        let view = editor_ref(&self.editor);
        let can_decrement = self.toolbar.font_size.can_decrement(view);
        let can_increment = self.toolbar.font_size.can_increment(view);

        if ui
            .add_enabled(can_decrement, egui::Button::new("-"))
            .on_hover_text("Decrease font size")
            .clicked()
        {
            self.toolbar
                .font_size
                .decrement(editor_mut(&mut self.editor));
        }

        if self.toolbar.font_size.is_editing() {
            let color = if self.toolbar.font_size.input_flagged() {
                COLOR_INVALID
            } else {
                COLOR_TEXT_PRIMARY
            };
            let response = ui.add(
                egui::TextEdit::singleline(self.toolbar.font_size.input_mut())
                    .desired_width(36.0)
                    .text_color(color),
            );
            if self.focus_font_size_input {
                response.request_focus();
                self.focus_font_size_input = false;
            }
            if response.lost_focus() {
                let enter = ui.input(|input| input.key_pressed(egui::Key::Enter));
                let result = if enter {
                    self.toolbar
                        .font_size
                        .commit_and_focus(editor_mut(&mut self.editor))
                } else {
                    self.toolbar.font_size.commit(editor_mut(&mut self.editor))
                };
                if let Err(err) = result {
                    debug!("font size not applied: {}", err);
                }
            }
        } else {
            let size = current_font_size(editor_ref(&self.editor));
            if ui.button(size).on_hover_text("Font size").clicked() {
                self.toolbar.font_size.begin_edit(editor_ref(&self.editor));
                self.focus_font_size_input = true;
            }
        }

        if ui
            .add_enabled(can_increment, egui::Button::new("+"))
            .on_hover_text("Increase font size")
            .clicked()
        {
            self.toolbar
                .font_size
                .increment(editor_mut(&mut self.editor));
        }
    }

    fn color_control(&mut self, ui: &mut egui::Ui, target: ColorTarget) {
        let current = color_slot(&mut self.toolbar, target).current(editor_ref(&self.editor));
        let swatch = hex_to_color32(&current, COLOR_TEXT_PRIMARY);
        let trigger = match target {
            ColorTarget::Text => ui
                .button(RichText::new("A").strong().color(swatch))
                .on_hover_text("Text color"),
            ColorTarget::Highlight => ui
                .add(egui::Button::new("H").fill(swatch))
                .on_hover_text("Highlight color"),
        };
        let control = color_slot(&mut self.toolbar, target);
        if trigger.clicked() {
            control.dropdown_mut().toggle();
        }
        let id_salt = match target {
            ColorTarget::Text => "text_color",
            ColorTarget::Highlight => "highlight_color",
        };
        let mut rgb = parse_hex(&current).unwrap_or([0, 0, 0]);
        let popup = show_popup(ui, id_salt, &trigger, control.dropdown().is_open(), |ui| {
            let mut chosen = None;
            egui::Grid::new(id_salt)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for (idx, hex) in TEXT_COLOR_PALETTE.iter().enumerate() {
                        let fill = hex_to_color32(hex, COLOR_TEXT_PRIMARY);
                        let swatch = egui::Button::new("")
                            .fill(fill)
                            .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                        if ui.add(swatch).on_hover_text(*hex).clicked() {
                            chosen = Some(hex.to_string());
                        }
                        if (idx + 1) % PALETTE_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
            ui.separator();
            if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                chosen = Some(format_hex(rgb));
            }
            chosen
        });
        if popup.dismissed {
            control.dropdown_mut().close();
        }
        if let Some(color) = popup.inner.flatten() {
            control.apply(editor_mut(&mut self.editor), &color);
        }
    }

    fn link_control(&mut self, ui: &mut egui::Ui) {
        let active = query_active(editor_ref(&self.editor), ActiveQuery::Mark(MarkType::Link));
        let trigger = ui
            .add(egui::Button::new("Link").selected(active))
            .on_hover_text("Link");
        if trigger.clicked() {
            self.toolbar.link.toggle(editor_ref(&self.editor));
        }
        let open = self.toolbar.link.dropdown().is_open();
        let link = &mut self.toolbar.link;
        let popup = show_popup(ui, "link", &trigger, open, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(link.value_mut())
                        .hint_text("https://example.com")
                        .desired_width(220.0),
                );
                let entered =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                let applied = ui.button("Apply").clicked();
                entered || applied
            })
            .inner
        });
        if popup.dismissed {
            self.toolbar.link.dropdown_mut().close();
        }
        if popup.inner == Some(true) {
            self.toolbar.link.apply(editor_mut(&mut self.editor));
        }
    }

    fn image_control(&mut self, ui: &mut egui::Ui) {
        let trigger = ui.button("Image").on_hover_text("Image");
        if trigger.clicked() {
            self.toolbar.image.dropdown_mut().toggle();
        }
        let open = self.toolbar.image.dropdown().is_open();
        let popup = show_popup(ui, "image", &trigger, open, |ui| {
            let mut chosen = None;
            if ui.button("Upload").clicked() {
                chosen = Some(ImageSource::Upload);
            }
            if ui.button("Paste image url").clicked() {
                chosen = Some(ImageSource::Url);
            }
            chosen
        });
        if popup.dismissed {
            self.toolbar.image.dropdown_mut().close();
        }
        match popup.inner.flatten() {
            Some(ImageSource::Upload) => self.toolbar.image.request_upload(&mut self.host),
            Some(ImageSource::Url) => self.toolbar.image.open_url_dialog(),
            None => {}
        }
    }

    fn align_control(&mut self, ui: &mut egui::Ui) {
        let editor = &self.editor;
        let current = current_align(editor_ref(editor));
        let trigger_label = ALIGN_OPTIONS
            .iter()
            .find(|option| option.align == current)
            .map(|option| option.label)
            .unwrap_or("Align");
        let chosen = option_dropdown(
            ui,
            "align",
            trigger_label,
            &mut self.toolbar.align,
            &ALIGN_OPTIONS,
            |option| RichText::new(option.label),
            |option| option.is_active(editor_ref(editor)),
        );
        if let Some(option) = chosen {
            option.apply(editor_mut(&mut self.editor));
        }
    }

    fn line_height_control(&mut self, ui: &mut egui::Ui) {
        let editor = &self.editor;
        let chosen = option_dropdown(
            ui,
            "line_height",
            "Line height",
            &mut self.toolbar.line_height,
            &LINE_HEIGHT_OPTIONS,
            |option| RichText::new(option.label),
            |option| option.is_selected(editor_ref(editor)),
        );
        if let Some(option) = chosen {
            option.apply(editor_mut(&mut self.editor));
        }
    }

    fn list_control(&mut self, ui: &mut egui::Ui) {
        let editor = &self.editor;
        let chosen = option_dropdown(
            ui,
            "list",
            "List",
            &mut self.toolbar.list,
            &LIST_OPTIONS,
            |option| RichText::new(option.label),
            |option| option.is_active(editor_ref(editor)),
        );
        if let Some(option) = chosen {
            option.apply(editor_mut(&mut self.editor));
        }
    }
}
