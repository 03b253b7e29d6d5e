#![windows_subsystem = "windows"]
//! Seal network settings - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod dialogs;
mod error;
mod preferences;
mod theme;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use preferences::{JsonPreferences, PreferenceStore};
use tracing::info;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "seal-network-settings.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seal_network_settings=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Seal network settings starting");

    let prefs = JsonPreferences::load(&data_dir);

    // Restore saved window position/size
    let int_pair = |a: &str, b: &str| {
        prefs
            .value(a)
            .and_then(|v| v.as_int())
            .zip(prefs.value(b).and_then(|v| v.as_int()))
            .map(|(x, y)| (x as f32, y as f32))
    };
    let win_pos = int_pair(WINDOW_X, WINDOW_Y).map(|(x, y)| egui::pos2(x, y));
    let win_size = int_pair(WINDOW_W, WINDOW_H).map(|(w, h)| egui::vec2(w, h));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(520.0, 560.0)))
        .with_min_inner_size([440.0, 480.0])
        .with_title(APP_NAME);

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: win_pos.is_none(),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, prefs)))),
    )
}
