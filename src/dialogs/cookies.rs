//! Cookies dialog: domain URL plus raw cookie file content

use super::DialogOutcome;
use crate::constants::{COOKIES_DOMAIN, COOKIES_FILE};
use crate::preferences::PreferenceStore;
use crate::theme;
use crate::ui::components::{self, FooterAction};
use crate::utils::match_url;
use eframe::egui;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct CookiesDialog {
    url: String,
    cookies: String,
}

/// Side effects the host has to carry out for a cookies dialog frame
#[derive(Debug, Default)]
pub struct CookiesFrame {
    pub outcome: Option<DialogOutcome>,
    /// Set when a paste found no URL in the clipboard
    pub paste_failed: bool,
}

impl CookiesDialog {
    pub fn open(store: &impl PreferenceStore) -> Self {
        Self {
            url: store.get_string(COOKIES_DOMAIN),
            cookies: store.get_string(COOKIES_FILE),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cookies(&self) -> &str {
        &self.cookies
    }

    pub fn on_edit_url(&mut self, text: &str) {
        self.url = text.to_owned();
    }

    pub fn on_edit_cookies(&mut self, text: &str) {
        self.cookies = text.to_owned();
    }

    /// Replace the URL draft with the first URL in `clipboard_text`.
    /// The draft is cleared when none is found.
    pub fn on_paste_url(&mut self, clipboard_text: &str) -> String {
        self.url = match match_url(clipboard_text) {
            Some(url) => url,
            None => {
                warn!("No URL found in clipboard");
                String::new()
            }
        };
        self.url.clone()
    }

    /// Store the URL draft right away so the generator page can pick it up.
    pub fn on_generate_requested(&self, store: &mut impl PreferenceStore) -> DialogOutcome {
        store.update_string(COOKIES_DOMAIN, &self.url);
        info!(domain = %self.url, "Opening cookie generator");
        DialogOutcome::NavigateToGenerator
    }

    /// Write both drafts as-is. Nothing is validated.
    pub fn confirm(&self, store: &mut impl PreferenceStore) {
        store.update_string(COOKIES_FILE, &self.cookies);
        store.update_string(COOKIES_DOMAIN, &self.url);
        info!(domain = %self.url, bytes = self.cookies.len(), "Cookies updated");
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &mut impl PreferenceStore) -> CookiesFrame {
        let mut frame = CookiesFrame::default();

        let modal = components::alert_dialog(
            ctx,
            "cookies_dialog",
            egui_phosphor::regular::COOKIE,
            "Cookies",
            |ui| {
                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    components::description(
                        ui,
                        "Load cookies from a file in Netscape format, or generate new ones by signing in to the site",
                    );
                    ui.add_space(theme::SPACING_XL);

                    components::supporting_text(ui, "URL", false);
                    theme::input_frame(false).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let mut url = self.url.clone();
                            let edit = ui.add(
                                egui::TextEdit::singleline(&mut url)
                                    .frame(false)
                                    .desired_width(ui.available_width() - theme::ICON_BUTTON_SIZE - theme::SPACING_MD)
                                    .font(egui::FontId::proportional(theme::FONT_BODY)),
                            );
                            if edit.changed() {
                                self.on_edit_url(&url);
                            }
                            if components::icon_button(ui, egui_phosphor::regular::CLIPBOARD_TEXT, "Paste").clicked() {
                                let pasted = self.on_paste_url(&read_clipboard());
                                frame.paste_failed = pasted.is_empty();
                            }
                        });
                    });

                    ui.add_space(theme::SPACING_XL);
                    components::supporting_text(ui, "Cookies file", false);
                    theme::input_frame(false).show(ui, |ui| {
                        let mut cookies = self.cookies.clone();
                        let edit = ui.add(
                            egui::TextEdit::multiline(&mut cookies)
                                .frame(false)
                                .desired_rows(8)
                                .desired_width(f32::INFINITY)
                                .code_editor(),
                        );
                        if edit.changed() {
                            self.on_edit_cookies(&cookies);
                        }
                    });

                    ui.add_space(theme::SPACING_LG);
                    if components::text_button_with_icon(
                        ui,
                        egui_phosphor::regular::SPARKLE,
                        "Generate new cookies",
                    ) {
                        frame.outcome = Some(self.on_generate_requested(store));
                    }
                });

                components::dialog_footer(ui)
            },
        );

        if frame.outcome.is_none() {
            frame.outcome = match modal.inner {
                FooterAction::Confirm => {
                    self.confirm(store);
                    Some(DialogOutcome::Dismissed)
                }
                FooterAction::Dismiss => Some(DialogOutcome::Dismissed),
                FooterAction::None if modal.should_close() => Some(DialogOutcome::Dismissed),
                FooterAction::None => None,
            };
        }
        frame
    }
}

/// Clipboard text, or empty if the clipboard is unavailable or holds no text
fn read_clipboard() -> String {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Failed to read clipboard");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;

    #[test]
    fn opens_with_stored_values() {
        let mut store = MemoryPreferences::new();
        store.update_string(COOKIES_DOMAIN, "https://youtube.com");
        store.update_string(COOKIES_FILE, "# Netscape HTTP Cookie File");

        let dialog = CookiesDialog::open(&store);
        assert_eq!(dialog.url(), "https://youtube.com");
        assert_eq!(dialog.cookies(), "# Netscape HTTP Cookie File");
    }

    #[test]
    fn confirm_writes_both_fields_verbatim() {
        let mut store = MemoryPreferences::new();
        let mut dialog = CookiesDialog::open(&store);
        dialog.on_edit_url("not a url at all");
        dialog.on_edit_cookies(".example.com\tTRUE\t/\tFALSE\t0\tsid\tabc\n");
        dialog.confirm(&mut store);

        assert_eq!(store.get_string(COOKIES_DOMAIN), "not a url at all");
        assert_eq!(store.get_string(COOKIES_FILE), ".example.com\tTRUE\t/\tFALSE\t0\tsid\tabc\n");
    }

    #[test]
    fn confirm_writes_empty_strings() {
        let mut store = MemoryPreferences::new();
        store.update_string(COOKIES_DOMAIN, "https://old.example.com");
        store.update_string(COOKIES_FILE, "old");

        let mut dialog = CookiesDialog::open(&store);
        dialog.on_edit_url("");
        dialog.on_edit_cookies("");
        dialog.confirm(&mut store);

        assert_eq!(store.get_string(COOKIES_DOMAIN), "");
        assert_eq!(store.get_string(COOKIES_FILE), "");
    }

    #[test]
    fn edits_do_not_touch_store() {
        let store = MemoryPreferences::new();
        let mut dialog = CookiesDialog::open(&store);
        dialog.on_edit_url("https://example.com");
        dialog.on_edit_cookies("cookie");
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn paste_extracts_url() {
        let store = MemoryPreferences::new();
        let mut dialog = CookiesDialog::open(&store);
        let pasted = dialog.on_paste_url("check this out: https://example.com/x?y=1 thanks");
        assert_eq!(pasted, "https://example.com/x?y=1");
        assert_eq!(dialog.url(), "https://example.com/x?y=1");
    }

    #[test]
    fn paste_without_url_clears_draft() {
        let store = MemoryPreferences::new();
        let mut dialog = CookiesDialog::open(&store);
        dialog.on_edit_url("https://example.com");
        assert_eq!(dialog.on_paste_url("no links here"), "");
        assert_eq!(dialog.url(), "");
    }

    #[test]
    fn generate_persists_domain_only() {
        let mut store = MemoryPreferences::new();
        let mut dialog = CookiesDialog::open(&store);
        dialog.on_edit_url("https://www.youtube.com");
        dialog.on_edit_cookies("unsaved");

        assert_eq!(dialog.on_generate_requested(&mut store), DialogOutcome::NavigateToGenerator);
        assert_eq!(store.get_string(COOKIES_DOMAIN), "https://www.youtube.com");
        assert_eq!(store.get_string(COOKIES_FILE), "");
        assert_eq!(store.writes(), 1);
    }
}
