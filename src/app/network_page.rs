//! Network settings page: the entry points for the three dialogs

use super::{ActiveDialog, App};
use crate::constants::*;
use crate::dialogs::{ConcurrentDownloadDialog, CookiesDialog, RateLimitDialog};
use crate::preferences::PreferenceStore;
use crate::theme;
use crate::ui::components;
use eframe::egui;

/// One-line summary of the stored cookies for the settings row
pub(crate) fn cookies_summary(domain: &str, cookies: &str) -> String {
    let lines = cookies
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .count();
    match (domain.is_empty(), lines) {
        (true, 0) => "No cookies configured".to_owned(),
        (true, n) => format!("{} cookie entries", n),
        (false, n) => format!("{} · {} cookie entries", domain, n),
    }
}

impl App {
    pub(crate) fn network_page(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::Label::new(
            egui::RichText::new("Network").size(theme::FONT_HEADING + 6.0).strong(),
        ).selectable(false));
        ui.add_space(theme::SPACING_LG);

        // — Rate limit —
        components::section_header(ui, "Download speed");
        let rate_limit = self.prefs.get_bool(RATE_LIMIT);
        if theme::settings_checkbox(ui, rate_limit, "Limit download rate", true) {
            self.prefs.update_bool(RATE_LIMIT, !rate_limit);
        }
        ui.add_space(theme::SPACING_SM);
        let summary = format!("{} KB/s", self.prefs.get_string(MAX_RATE));
        if components::settings_row(ui, egui_phosphor::regular::GAUGE, "Rate limit", &summary, rate_limit).clicked() {
            self.open_dialog(ActiveDialog::RateLimit(RateLimitDialog::open(&self.prefs)));
        }

        ui.add_space(theme::SPACING_MD);
        let fragments = self.prefs.get_int(CONCURRENT);
        let summary = if fragments <= 1 {
            "1 fragment at a time".to_owned()
        } else {
            format!("{} fragments at a time", fragments)
        };
        if components::settings_row(ui, egui_phosphor::regular::LIGHTNING, "Concurrent download", &summary, true).clicked() {
            self.open_dialog(ActiveDialog::Concurrency(ConcurrentDownloadDialog::open(&self.prefs)));
        }

        ui.add_space(theme::SPACING_MD);
        ui.separator();
        ui.add_space(theme::SPACING_SM);

        // — Cookies —
        components::section_header(ui, "Cookies");
        let cookies_enabled = self.prefs.get_bool(COOKIES);
        if theme::settings_checkbox(ui, cookies_enabled, "Use cookies", true) {
            self.prefs.update_bool(COOKIES, !cookies_enabled);
        }
        ui.add_space(theme::SPACING_SM);
        let summary = cookies_summary(
            &self.prefs.get_string(COOKIES_DOMAIN),
            &self.prefs.get_string(COOKIES_FILE),
        );
        if components::settings_row(ui, egui_phosphor::regular::COOKIE, "Cookies", &summary, cookies_enabled).clicked() {
            self.open_dialog(ActiveDialog::Cookies(CookiesDialog::open(&self.prefs)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_cookie_lines() {
        let cookies = "# Netscape HTTP Cookie File\n\n.a.com\tTRUE\t/\tFALSE\t0\tx\t1\n.a.com\tTRUE\t/\tFALSE\t0\ty\t2\n";
        assert_eq!(cookies_summary("", ""), "No cookies configured");
        assert_eq!(cookies_summary("", cookies), "2 cookie entries");
        assert_eq!(
            cookies_summary("https://a.com", cookies),
            "https://a.com · 2 cookie entries"
        );
    }
}
