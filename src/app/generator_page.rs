//! Cookie generator page, reached from the cookies dialog

use super::{ActiveDialog, App, Page};
use crate::constants::COOKIES_DOMAIN;
use crate::dialogs::CookiesDialog;
use crate::preferences::PreferenceStore;
use crate::theme;
use crate::ui::components;
use eframe::egui;
use tracing::{info, warn};

impl App {
    pub(crate) fn generator_page(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if components::icon_button(ui, egui_phosphor::regular::ARROW_LEFT, "Back").clicked() {
                self.page = Page::NetworkSettings;
            }
            ui.add(egui::Label::new(
                egui::RichText::new("Generate cookies").size(theme::FONT_HEADING + 6.0).strong(),
            ).selectable(false));
        });
        ui.add_space(theme::SPACING_LG);

        let domain = self.prefs.get_string(COOKIES_DOMAIN);
        components::description(
            ui,
            "Sign in to the site in your browser, export its cookies in Netscape format, then paste them into the cookies dialog.",
        );
        ui.add_space(theme::SPACING_MD);

        let shown = if domain.is_empty() { "No domain set" } else { domain.as_str() };
        theme::input_frame(false).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(shown).color(theme::TEXT_SECONDARY).monospace());
        });
        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            if !domain.is_empty()
                && components::text_button_with_icon(ui, egui_phosphor::regular::ARROW_SQUARE_OUT, "Open in browser")
            {
                match open::that(&domain) {
                    Ok(()) => info!(domain = %domain, "Opened cookie domain in browser"),
                    Err(e) => {
                        warn!(error = %e, domain = %domain, "Failed to open browser");
                        self.show_toast("Could not open the browser");
                    }
                }
            }
            if components::text_button_with_icon(ui, egui_phosphor::regular::COOKIE, "Edit cookies") {
                self.page = Page::NetworkSettings;
                self.open_dialog(ActiveDialog::Cookies(CookiesDialog::open(&self.prefs)));
            }
        });
    }
}
