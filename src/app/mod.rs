//! App module - contains the main application state and page routing

mod generator_page;
mod network_page;
mod toast;

use crate::constants::*;
use crate::dialogs::{ConcurrentDownloadDialog, CookiesDialog, DialogOutcome, RateLimitDialog};
use crate::preferences::{JsonPreferences, PreferenceStore};
use crate::theme;
use eframe::egui;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    NetworkSettings,
    CookieGenerator,
}

/// The dialog currently shown over the page. Only one can be open at a time.
pub(crate) enum ActiveDialog {
    RateLimit(RateLimitDialog),
    Cookies(CookiesDialog),
    Concurrency(ConcurrentDownloadDialog),
}

pub struct App {
    pub(crate) prefs: JsonPreferences,
    pub(crate) page: Page,
    pub(crate) active_dialog: Option<ActiveDialog>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, prefs: JsonPreferences) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            prefs,
            page: Page::NetworkSettings,
            active_dialog: None,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
        }
    }

    pub(crate) fn open_dialog(&mut self, dialog: ActiveDialog) {
        let name = match &dialog {
            ActiveDialog::RateLimit(_) => "rate_limit",
            ActiveDialog::Cookies(_) => "cookies",
            ActiveDialog::Concurrency(_) => "concurrency",
        };
        debug!(dialog = name, "Opening dialog");
        self.active_dialog = Some(dialog);
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    /// Render the open dialog, if any, and apply whatever it asks of the host.
    fn show_active_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.active_dialog.as_mut() else {
            return;
        };

        let mut paste_failed = false;
        let outcome = match dialog {
            ActiveDialog::RateLimit(d) => d.show(ctx, &mut self.prefs),
            ActiveDialog::Concurrency(d) => d.show(ctx, &mut self.prefs),
            ActiveDialog::Cookies(d) => {
                let frame = d.show(ctx, &mut self.prefs);
                paste_failed = frame.paste_failed;
                frame.outcome.unwrap_or(DialogOutcome::Open)
            }
        };

        if paste_failed {
            self.show_toast("No URL found in clipboard");
        }

        match outcome {
            DialogOutcome::Open => {}
            DialogOutcome::Dismissed => self.active_dialog = None,
            DialogOutcome::NavigateToGenerator => {
                self.active_dialog = None;
                self.page = Page::CookieGenerator;
            }
        }
    }

    pub fn save_window_geometry(&mut self) {
        if let Some(pos) = self.window_pos {
            self.prefs.update_int(WINDOW_X, pos.x.round() as i32);
            self.prefs.update_int(WINDOW_Y, pos.y.round() as i32);
        }
        if let Some(size) = self.window_size {
            self.prefs.update_int(WINDOW_W, size.x.round() as i32);
            self.prefs.update_int(WINDOW_H, size.y.round() as i32);
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE).inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| match self.page {
                Page::NetworkSettings => self.network_page(ui),
                Page::CookieGenerator => self.generator_page(ui),
            });

        self.show_active_dialog(ctx);
        self.show_toast_overlay(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_window_geometry();
    }
}
