//! Theme constants and one-time style application for the egui app.

use super::QuireApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};
use quire_core::toolbar::parse_hex;

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0xf1, 0xf3, 0xf4);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0x20, 0x21, 0x24);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x5f, 0x63, 0x68);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x80, 0x86, 0x8b);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x1a, 0x73, 0xe8);
pub(super) const COLOR_ACTIVE_FILL: Color32 = Color32::from_rgb(0xd3, 0xe3, 0xfd);
pub(super) const COLOR_INVALID: Color32 = Color32::from_rgb(0xd9, 0x30, 0x25);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0xda, 0xdc, 0xe0);

/// Parses a `#rrggbb` toolbar color into an egui color, falling back to `fallback`.
pub(super) fn hex_to_color32(hex: &str, fallback: Color32) -> Color32 {
    parse_hex(hex)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(fallback)
}

impl QuireApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::light();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_SECONDARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.selection.bg_fill = COLOR_ACTIVE_FILL;
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_ACCENT);

        style.visuals.widgets.inactive = WidgetVisuals {
            bg_fill: COLOR_BG_SECONDARY,
            weak_bg_fill: COLOR_BG_SECONDARY,
            bg_stroke: Stroke::NONE,
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.0,
        };
        style.visuals.widgets.hovered = WidgetVisuals {
            bg_fill: COLOR_BG_TERTIARY,
            weak_bg_fill: COLOR_BG_TERTIARY,
            bg_stroke: Stroke::new(1.0, COLOR_BORDER),
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.0,
        };
        style.visuals.widgets.active = WidgetVisuals {
            bg_fill: COLOR_ACTIVE_FILL,
            weak_bg_fill: COLOR_ACTIVE_FILL,
            bg_stroke: Stroke::new(1.0, COLOR_ACCENT),
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.0,
        };

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.menu_margin = Margin::same(6);

        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
