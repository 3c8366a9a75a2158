//! tricalc - scientific calculator, unit converter and quadratic solver

mod app;
mod settings;

use app::TriCalcApp;
use eframe::NativeOptions;
use settings::{CalcSettings, THEME_ENV};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let (mut settings, load_error) = match CalcSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (CalcSettings::default(), Some(e)),
    };
    let env_error = settings.apply_env().err();

    init_tracing(&settings.log_filter);
    if let Some(e) = load_error {
        warn!(path = %CalcSettings::config_path().display(), error = %e, "ignoring settings file");
    }
    if let Some(e) = env_error {
        warn!(var = THEME_ENV, error = %e, "ignoring theme override");
    }
    info!(theme = %settings.theme, display_max_len = settings.display_max_len, "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 520.0])
            .with_title("tricalc"),
        ..Default::default()
    };

    eframe::run_native(
        "tricalc",
        options,
        Box::new(move |cc| Box::new(TriCalcApp::new(cc, &settings))),
    )
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
