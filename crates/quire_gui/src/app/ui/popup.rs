//! Anchored dropdown popups.

use super::super::*;
use eframe::egui;
use quire_core::toolbar::Dropdown;

/// Result of showing a popup for one frame.
pub(crate) struct PopupOutcome<R> {
    /// Value returned by the popup contents, if it was shown.
    pub(crate) inner: Option<R>,
    /// Click outside the popup and its trigger, or Escape.
    pub(crate) dismissed: bool,
}

/// Shows `add_contents` below `trigger` while `open`.
///
/// The popup never owns its open state; callers feed it from their
/// `Dropdown` model and close that model on dismissal or selection.
pub(crate) fn show_popup<R>(
    ui: &mut egui::Ui,
    id_salt: &str,
    trigger: &egui::Response,
    open: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> PopupOutcome<R> {
    if !open {
        return PopupOutcome {
            inner: None,
            dismissed: false,
        };
    }
    let area = egui::Area::new(trigger.id.with(id_salt))
        .order(egui::Order::Foreground)
        .fixed_pos(trigger.rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(COLOR_BG_PRIMARY)
                .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                .show(ui, add_contents)
                .inner
        });
    let clicked_elsewhere = ui.input(|input| input.pointer.any_click())
        && !trigger.clicked()
        && !area.response.contains_pointer();
    let escaped = ui.input(|input| input.key_pressed(egui::Key::Escape));
    PopupOutcome {
        inner: Some(area.inner),
        dismissed: clicked_elsewhere || escaped,
    }
}

/// Dropdown of fixed options with a text trigger.
///
/// # Returns
/// The option picked this frame. The dropdown is closed on pick or dismissal.
pub(crate) fn option_dropdown<T: Copy>(
    ui: &mut egui::Ui,
    id_salt: &str,
    trigger_text: impl Into<egui::WidgetText>,
    dropdown: &mut Dropdown,
    options: &[T],
    label: impl Fn(&T) -> egui::RichText,
    selected: impl Fn(&T) -> bool,
) -> Option<T> {
    let trigger = ui.button(trigger_text);
    if trigger.clicked() {
        dropdown.toggle();
    }
    let popup = show_popup(ui, id_salt, &trigger, dropdown.is_open(), |ui| {
        let mut chosen = None;
        for option in options {
            if ui.selectable_label(selected(option), label(option)).clicked() {
                chosen = Some(*option);
            }
        }
        chosen
    });
    if popup.dismissed {
        dropdown.close();
    }
    let chosen = popup.inner.flatten();
    if chosen.is_some() {
        dropdown.close();
    }
    chosen
}
