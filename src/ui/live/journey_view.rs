use egui::{Color32, RichText, Slider};

use crate::telemetry::{JitterSource, TelemetrySnapshot};
use crate::ui::{PALETTE_BLUE, card_frame, section_frame, stat};

use super::TruckDashboardApp;

/// Room left next to the slider for its value box
const SLIDER_VALUE_WIDTH: f32 = 60.;

impl<J: JitterSource> TruckDashboardApp<J> {
    pub(crate) fn journey_view(&mut self, ui: &mut egui::Ui, snapshot: &TelemetrySnapshot) {
        section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(RichText::new("Journey Control").color(Color32::WHITE));
            ui.add_space(8.);

            let slider_width = ui.available_width() - SLIDER_VALUE_WIDTH;
            ui.spacing_mut().slider_width = slider_width;
            let slider = ui.add(
                Slider::new(&mut self.progress_input, 0.0..=100.0)
                    .step_by(1.)
                    .suffix("%")
                    .trailing_fill(true),
            );
            if slider.changed() {
                self.dashboard.set_progress(self.progress_input);
                ui.ctx().request_repaint();
            }
            ui.add_space(8.);

            let units = self.app_config.units;
            card_frame(PALETTE_BLUE.gamma_multiply(0.1), PALETTE_BLUE).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(&snapshot.segment_label)
                        .size(20.)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(6.);
                ui.columns(2, |columns| {
                    stat(&mut columns[0], "⚡", "Speed", units.format_speed(snapshot.speed_kph));
                    stat(
                        &mut columns[0],
                        "📍",
                        "Distance",
                        units.format_distance(snapshot.distance_km),
                    );
                    stat(
                        &mut columns[1],
                        "📌",
                        "Location",
                        snapshot.position.to_string(),
                    );
                    stat(
                        &mut columns[1],
                        "🌡",
                        "Temperature",
                        units.format_temperature(snapshot.temperature_c),
                    );
                });
            });
        });
    }
}
