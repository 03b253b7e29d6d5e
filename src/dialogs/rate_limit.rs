//! Download rate cap dialog

use super::DialogOutcome;
use crate::constants::{MAX_RATE, MAX_RATE_RANGE};
use crate::error::ValidationError;
use crate::preferences::PreferenceStore;
use crate::theme;
use crate::ui::components::{self, FooterAction};
use crate::utils::is_number_in_range;
use eframe::egui;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RateLimitDialog {
    draft: String,
    is_error: bool,
}

impl RateLimitDialog {
    pub fn open(store: &impl PreferenceStore) -> Self {
        Self {
            draft: store.get_string(MAX_RATE),
            is_error: false,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Replace the draft with `text` if it is all ASCII digits; otherwise
    /// the edit is ignored. Either way the error flag clears.
    pub fn on_edit(&mut self, text: &str) {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            self.draft = text.to_owned();
        }
        self.is_error = false;
    }

    /// Validate the draft and write it to the store.
    ///
    /// On failure the error flag is raised and the store is left untouched.
    pub fn confirm(&mut self, store: &mut impl PreferenceStore) -> Result<(), ValidationError> {
        let (min, max) = MAX_RATE_RANGE;
        if !is_number_in_range(&self.draft, min, max) {
            debug!(draft = %self.draft, "Rejected rate limit input");
            self.is_error = true;
            return Err(ValidationError::OutOfRangeOrNonNumeric { min, max });
        }
        store.update_string(MAX_RATE, &self.draft);
        info!(rate = %self.draft, "Max download rate updated");
        Ok(())
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &mut impl PreferenceStore) -> DialogOutcome {
        let modal = components::alert_dialog(
            ctx,
            "rate_limit_dialog",
            egui_phosphor::regular::GAUGE,
            "Rate limit",
            |ui| {
                components::description(
                    ui,
                    "Maximum download rate, in kilobytes per second",
                );
                ui.add_space(theme::SPACING_XL);
                components::supporting_text(ui, "Max rate", false);

                let mut text = self.draft.clone();
                theme::input_frame(self.is_error).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let suffix_width = 16.0;
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut text)
                                .frame(false)
                                .desired_width(ui.available_width() - suffix_width)
                                .font(egui::FontId::proportional(theme::FONT_BODY)),
                        );
                        if edit.changed() {
                            self.on_edit(&text);
                        }
                        ui.label(egui::RichText::new("K").color(theme::TEXT_MUTED));
                    });
                });

                let error_text = if self.is_error { "Invalid input" } else { "" };
                components::supporting_text(ui, error_text, self.is_error);

                components::dialog_footer(ui)
            },
        );

        match modal.inner {
            FooterAction::Confirm => match self.confirm(store) {
                Ok(()) => DialogOutcome::Dismissed,
                Err(_) => DialogOutcome::Open,
            },
            FooterAction::Dismiss => DialogOutcome::Dismissed,
            FooterAction::None if modal.should_close() => DialogOutcome::Dismissed,
            FooterAction::None => DialogOutcome::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;

    fn dialog_with(store: &MemoryPreferences, text: &str) -> RateLimitDialog {
        let mut dialog = RateLimitDialog::open(store);
        dialog.on_edit(text);
        dialog
    }

    #[test]
    fn opens_with_stored_rate() {
        let mut store = MemoryPreferences::new();
        assert_eq!(RateLimitDialog::open(&store).draft(), "1000");

        store.update_string(MAX_RATE, "250");
        let dialog = RateLimitDialog::open(&store);
        assert_eq!(dialog.draft(), "250");
        assert!(!dialog.is_error());
    }

    #[test]
    fn valid_rates_are_written_verbatim() {
        for rate in ["1", "42", "0500", "999999", "1000000"] {
            let mut store = MemoryPreferences::new();
            let mut dialog = dialog_with(&store, rate);
            assert_eq!(dialog.confirm(&mut store), Ok(()));
            assert_eq!(store.get_string(MAX_RATE), rate);
            assert!(!dialog.is_error());
        }
    }

    #[test]
    fn out_of_range_sets_error_without_writing() {
        for rate in ["0", "1000001", "", "99999999999"] {
            let mut store = MemoryPreferences::new();
            let mut dialog = dialog_with(&store, rate);
            assert!(dialog.confirm(&mut store).is_err());
            assert!(dialog.is_error());
            assert_eq!(store.writes(), 0);
            assert_eq!(store.get_string(MAX_RATE), "1000");
        }
    }

    #[test]
    fn non_digit_keystroke_is_ignored() {
        let store = MemoryPreferences::new();
        let mut dialog = dialog_with(&store, "");
        for c in "12a".chars() {
            let next = format!("{}{}", dialog.draft(), c);
            dialog.on_edit(&next);
        }
        assert_eq!(dialog.draft(), "12");
    }

    #[test]
    fn pasted_value_with_units_leaves_draft_unchanged() {
        let mut store = MemoryPreferences::new();
        let mut dialog = RateLimitDialog::open(&store);
        dialog.on_edit("4.2M");
        assert_eq!(dialog.draft(), "1000");

        assert!(dialog.confirm(&mut store).is_ok());
        assert_eq!(store.get_string(MAX_RATE), "1000");
    }

    #[test]
    fn ignored_edit_still_clears_error() {
        let mut store = MemoryPreferences::new();
        let mut dialog = dialog_with(&store, "0");
        assert!(dialog.confirm(&mut store).is_err());

        dialog.on_edit("0x");
        assert_eq!(dialog.draft(), "0");
        assert!(!dialog.is_error());
    }

    #[test]
    fn leading_zeros_are_accepted() {
        let mut store = MemoryPreferences::new();
        let mut dialog = dialog_with(&store, "0000000500");
        assert_eq!(dialog.confirm(&mut store), Ok(()));
        assert_eq!(store.get_string(MAX_RATE), "0000000500");
    }

    #[test]
    fn editing_clears_error() {
        let mut store = MemoryPreferences::new();
        let mut dialog = dialog_with(&store, "0");
        assert!(dialog.confirm(&mut store).is_err());
        assert!(dialog.is_error());

        dialog.on_edit("10");
        assert!(!dialog.is_error());
        assert!(dialog.confirm(&mut store).is_ok());
        assert_eq!(store.get_string(MAX_RATE), "10");
    }

    #[test]
    fn error_reports_accepted_range() {
        let mut store = MemoryPreferences::new();
        let err = dialog_with(&store, "0").confirm(&mut store).unwrap_err();
        assert_eq!(err.to_string(), "rate must be a whole number between 1 and 1000000");
    }
}
