use egui::{Color32, Frame, Margin, RichText, Stroke, Ui};

use crate::telemetry::AlertSeverity;

pub mod live;

pub(crate) const PALETTE_SLATE: Color32 = Color32::from_rgb(15, 23, 42);
pub(crate) const PALETTE_SLATE_LIGHT: Color32 = Color32::from_rgb(30, 41, 59);
pub(crate) const PALETTE_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
pub(crate) const PALETTE_BLUE_DARK: Color32 = Color32::from_rgb(30, 58, 138);
pub(crate) const PALETTE_MUTED: Color32 = Color32::from_rgb(148, 163, 184);

pub(crate) const PALETTE_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub(crate) const PALETTE_AMBER: Color32 = Color32::from_rgb(245, 158, 11);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

const CARD_CORNER_RADIUS: u8 = 8;
const CARD_MARGIN: i8 = 12;
const STAT_ICON_SIZE: f32 = 20.;
const STAT_VALUE_SIZE: f32 = 18.;

/// Rounded panel used for every dashboard section.
pub(crate) fn section_frame() -> Frame {
    card_frame(PALETTE_SLATE_LIGHT, PALETTE_SLATE_LIGHT)
}

pub(crate) fn card_frame(fill: Color32, border: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1., border))
        .corner_radius(CARD_CORNER_RADIUS)
        .inner_margin(Margin::same(CARD_MARGIN))
}

/// `(fill, border, text)` colors for an alert card.
pub(crate) fn severity_colors(severity: AlertSeverity) -> (Color32, Color32, Color32) {
    let accent = match severity {
        AlertSeverity::Emergency => PALETTE_RED,
        AlertSeverity::Warning => PALETTE_AMBER,
    };
    (accent.gamma_multiply(0.15), accent, accent)
}

/// Icon, small caption and a large value stacked next to it.
pub(crate) fn stat(ui: &mut Ui, icon: &str, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(STAT_ICON_SIZE));
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().color(PALETTE_MUTED));
            ui.label(
                RichText::new(value)
                    .strong()
                    .size(STAT_VALUE_SIZE)
                    .color(Color32::WHITE),
            );
        });
    });
}
