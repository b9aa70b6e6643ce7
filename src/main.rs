use std::{io, path::PathBuf, sync::mpsc, thread};

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::{info, warn};
use truck_monitor::{
    AppConfig, Dashboard, Route, TelemetrySimulator, TruckMonitorError,
    telemetry::{RandomJitter, TelemetryRecord, collect_journey},
    ui::live::TruckDashboardApp,
    writer,
};

const DEFAULT_STEP_PCT: f64 = 10.;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the dashboard window
    Dashboard {
        /// Seed for speed and temperature jitter
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON route file replacing the built-in route
        #[arg(short, long)]
        route: Option<PathBuf>,

        /// Number of readings kept in the fuel chart
        #[arg(long)]
        history: Option<usize>,

        /// Record every snapshot to a JSON Lines file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sweep the journey without a window and print the records
    Simulate {
        /// Progress increment between records, in percent (0.01 to 100)
        #[arg(long, default_value_t = DEFAULT_STEP_PCT)]
        step: f64,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long)]
        route: Option<PathBuf>,

        /// Write records to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config() -> AppConfig {
    match AppConfig::from_local_file() {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            warn!("Could not load config file, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

fn load_route(route: Option<PathBuf>, app_config: &AppConfig) -> Result<Route, TruckMonitorError> {
    match route.or_else(|| app_config.route_file.clone()) {
        Some(path) => Route::from_file(&path),
        None => Ok(Route::default()),
    }
}

fn dashboard(
    seed: Option<u64>,
    route: Option<PathBuf>,
    history: Option<usize>,
    output: Option<PathBuf>,
) -> Result<(), TruckMonitorError> {
    let mut app_config = load_config();
    if let Some(history) = history {
        app_config.history_capacity = history;
    }
    app_config.validate()?;

    let route = load_route(route, &app_config)?;
    let simulator = TelemetrySimulator::new(
        route,
        app_config.alert_thresholds.clone(),
        RandomJitter::from_seed(seed),
    );
    let dashboard = Dashboard::new(simulator, app_config.history_capacity);

    // when recording, the dashboard sends every snapshot to a writer thread
    let (dashboard, writer_handle) = match output {
        Some(output_file) => {
            let (telemetry_tx, telemetry_rx) = mpsc::channel::<TelemetryRecord>();
            let handle =
                thread::spawn(move || writer::write_telemetry(&output_file, telemetry_rx));
            (dashboard.with_recorder(telemetry_tx), Some(handle))
        }
        None => (dashboard, None),
    };

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("Truck Monitor")
        .with_inner_size(Vec2::new(1100., 780.));

    eframe::run_native(
        "Truck Monitor",
        native_options,
        Box::new(|cc| Ok(Box::new(TruckDashboardApp::new(dashboard, app_config, cc)))),
    )
    .map_err(|e| TruckMonitorError::UiError {
        description: e.to_string(),
    })?;

    // the app and its sender are gone once the window closes
    if let Some(handle) = writer_handle {
        match handle.join() {
            Ok(result) => {
                let written = result?;
                info!("Recorded {} telemetry records", written);
            }
            Err(_) => warn!("Telemetry writer thread panicked"),
        }
    }
    Ok(())
}

fn simulate(
    step: f64,
    seed: Option<u64>,
    route: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), TruckMonitorError> {
    let app_config = load_config();
    let route = load_route(route, &app_config)?;
    let mut simulator = TelemetrySimulator::new(
        route,
        app_config.alert_thresholds.clone(),
        RandomJitter::from_seed(seed),
    );

    let (telemetry_tx, telemetry_rx) = mpsc::channel::<TelemetryRecord>();
    let writer_handle = thread::spawn(move || match output {
        Some(output_file) => writer::write_telemetry(&output_file, telemetry_rx),
        None => writer::write_telemetry_to(io::stdout().lock(), telemetry_rx),
    });

    let sent = collect_journey(&mut simulator, step, telemetry_tx)?;
    let written = writer_handle
        .join()
        .map_err(|_| TruckMonitorError::WriterError {
            source: io::Error::other("telemetry writer thread panicked"),
        })??;
    if written < sent {
        warn!(
            "Only {} of {} simulated records were written, the output is incomplete",
            written, sent
        );
    }
    info!("Simulated {} steps, wrote {} records", sent, written);
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    }) {
        warn!("Could not set Ctrl-C handler: {}", e);
    }

    let result = match cli.command {
        Commands::Dashboard {
            seed,
            route,
            history,
            output,
        } => dashboard(seed, route, history, output),
        Commands::Simulate {
            step,
            seed,
            route,
            output,
        } => simulate(step, seed, route, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", snafu::Report::from_error(e));
        std::process::exit(1);
    }
}
