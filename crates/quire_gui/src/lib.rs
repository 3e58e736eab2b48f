//! Desktop shell library entry point.
//!
//! Exposes a `run` helper so the workspace root can launch the desktop UI
//! without duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::QuireApp;
use eframe::egui;
use quire_core::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "quire=warn,quire_gui=info,quire_core=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second launch in the same process (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the desktop UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let app = QuireApp::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Quire"),
        ..Default::default()
    };

    eframe::run_native("Quire", options, Box::new(|_cc| Ok(Box::new(app))))
}
