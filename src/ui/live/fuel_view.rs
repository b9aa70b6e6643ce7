use egui::{Color32, ProgressBar, RichText};
use egui_plot::{Legend, Line, PlotPoints};

use crate::telemetry::{JitterSource, TelemetrySnapshot};
use crate::ui::{PALETTE_BLUE, PALETTE_GREEN, PALETTE_MUTED, PALETTE_RED, section_frame};

use super::TruckDashboardApp;

const FUEL_PLOT_HEIGHT: f32 = 220.;
/// Axis ticks further than this from an entry position get no time label
const TICK_SNAP_TOLERANCE: f64 = 1e-6;
/// Below this level the fuel gauge turns red
const LOW_FUEL_PCT: f64 = 30.;

impl<J: JitterSource> TruckDashboardApp<J> {
    pub(crate) fn fuel_view(&mut self, ui: &mut egui::Ui, snapshot: &TelemetrySnapshot) {
        section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(RichText::new("Fuel Monitoring").color(Color32::WHITE));
            ui.add_space(8.);

            let history = self.dashboard.history();
            let plot = egui_plot::Plot::new("fuel_history")
                .height(FUEL_PLOT_HEIGHT)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_zoom(false)
                .include_x(0.)
                .include_x(history.capacity().saturating_sub(1) as f64)
                .include_y(0.)
                .include_y(100.)
                .x_axis_formatter(|mark, _range| {
                    if (mark.value - mark.value.round()).abs() > TICK_SNAP_TOLERANCE {
                        return String::new();
                    }
                    history
                        .timestamp_at(mark.value)
                        .map(str::to_string)
                        .unwrap_or_default()
                })
                .label_formatter(|_name, value| match history.timestamp_at(value.x) {
                    Some(timestamp) => format!("{}\nFuel: {:.1}%", timestamp, value.y),
                    None => String::new(),
                })
                .legend(Legend::default());
            let fuel_points = PlotPoints::new(history.fuel_points());
            plot.show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Fuel %", fuel_points)
                        .color(PALETTE_BLUE)
                        .width(2.),
                );
            });

            if let (Some(oldest), Some(latest)) = (history.oldest(), history.latest()) {
                ui.label(
                    RichText::new(format!(
                        "{} to {} ({} readings)",
                        oldest.timestamp,
                        latest.timestamp,
                        history.len()
                    ))
                    .small()
                    .color(PALETTE_MUTED),
                );
            }
            ui.add_space(8.);

            let gauge_color = if snapshot.fuel_level_pct < LOW_FUEL_PCT {
                PALETTE_RED
            } else {
                PALETTE_GREEN
            };
            ui.add(ProgressBar::new((snapshot.fuel_level_pct / 100.) as f32).fill(gauge_color));
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("Fuel Level: {:.1}%", snapshot.fuel_level_pct))
                        .strong()
                        .color(Color32::WHITE),
                );
            });
        });
    }
}
