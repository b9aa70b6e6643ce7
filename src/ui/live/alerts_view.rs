use egui::{Color32, RichText};

use crate::telemetry::{AlertSeverity, JitterSource, TelemetrySnapshot};
use crate::ui::{PALETTE_GREEN, card_frame, section_frame, severity_colors};

use super::TruckDashboardApp;

impl<J: JitterSource> TruckDashboardApp<J> {
    pub(crate) fn alerts_view(&mut self, ui: &mut egui::Ui, snapshot: &TelemetrySnapshot) {
        section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(RichText::new("Active Alerts").color(Color32::WHITE));
            ui.add_space(8.);

            if snapshot.alerts.is_empty() {
                card_frame(PALETTE_GREEN.gamma_multiply(0.15), PALETTE_GREEN).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("All systems normal").strong().color(PALETTE_GREEN));
                });
                return;
            }

            for alert in &snapshot.alerts {
                let (fill, border, text) = severity_colors(alert.severity());
                let icon = match alert.severity() {
                    AlertSeverity::Emergency => "🔴",
                    AlertSeverity::Warning => "⚠",
                };
                card_frame(fill, border).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(format!("{} {}", icon, alert))
                            .strong()
                            .color(text),
                    );
                });
                ui.add_space(4.);
            }
        });
    }
}
