mod alerts_view;
mod fuel_view;
mod journey_view;

use egui::{Color32, RichText, ScrollArea, Visuals, style::Widgets};
use log::{error, info};

use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::telemetry::JitterSource;
use crate::units::UnitSystem;
use crate::writer::export_history;

use super::{
    PALETTE_BLUE, PALETTE_BLUE_DARK, PALETTE_MUTED, PALETTE_RED, PALETTE_SLATE, PALETTE_SLATE_LIGHT,
};

const SECTION_SPACING: f32 = 12.;
const HISTORY_EXPORT_FILE_NAME: &str = "fuel_history.jsonl";

/// `TruckDashboardApp` renders a [`Dashboard`] with egui.
///
/// # Fields
///
/// * `dashboard` - The view model holding progress, snapshot and history.
/// * `app_config` - User settings, saved back to disk on exit.
/// * `progress_input` - Value bound to the journey slider.
/// * `status_message` - Result of the last history export, if any.
pub struct TruckDashboardApp<J: JitterSource> {
    dashboard: Dashboard<J>,
    app_config: AppConfig,
    progress_input: f64,
    status_message: Option<String>,
}

impl<J: JitterSource> TruckDashboardApp<J> {
    pub fn new(
        mut dashboard: Dashboard<J>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_BLUE,
            faint_bg_color: PALETTE_SLATE_LIGHT,
            extreme_bg_color: PALETTE_SLATE,
            panel_fill: PALETTE_SLATE,
            window_fill: PALETTE_SLATE,
            selection: egui::style::Selection {
                bg_fill: PALETTE_BLUE,
                ..Default::default()
            },
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        // the journey starts at the origin
        dashboard.set_progress(0.);

        Self {
            progress_input: dashboard.progress(),
            dashboard,
            app_config,
            status_message: None,
        }
    }

    fn header_view(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(PALETTE_BLUE_DARK)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Truck Management Dashboard")
                            .strong()
                            .color(Color32::WHITE),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.app_config.truck_id)
                                .monospace()
                                .color(Color32::WHITE),
                        );
                        ui.label(RichText::new("Truck ID:").color(PALETTE_MUTED));
                        ui.separator();

                        if ui.button("Export history").clicked() {
                            self.export_history();
                        }
                        for units in [UnitSystem::Imperial, UnitSystem::Metric] {
                            ui.selectable_value(&mut self.app_config.units, units, units.label());
                        }
                        if self.dashboard.is_recording() {
                            ui.label(RichText::new("● REC").color(PALETTE_RED));
                        }
                        if let Some(message) = &self.status_message {
                            ui.label(RichText::new(message).small().color(PALETTE_MUTED));
                        }
                    });
                });
            });
    }

    fn export_history(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Lines", &["jsonl"])
            .set_file_name(HISTORY_EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        self.status_message = Some(match export_history(&path, self.dashboard.history()) {
            Ok(()) => {
                info!("Exported fuel history to {:?}", path);
                format!("Saved {} entries", self.dashboard.history().len())
            }
            Err(e) => {
                error!("Error while exporting fuel history: {}", e);
                "Export failed".to_string()
            }
        });
    }
}

impl<J: JitterSource> eframe::App for TruckDashboardApp<J> {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.header_view(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            // nothing to show until the first snapshot is computed
            let Some(snapshot) = self.dashboard.snapshot().cloned() else {
                return;
            };

            ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    self.journey_view(&mut columns[0], &snapshot);
                    self.fuel_view(&mut columns[1], &snapshot);
                });
                ui.add_space(SECTION_SPACING);
                self.alerts_view(ui, &snapshot);
            });
        });
    }
}
