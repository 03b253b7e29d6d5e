//! Concurrent fragment download dialog
//!
//! The slider runs over `0..=1` in quarter steps and maps onto fragment
//! counts `{1, 4, 8, 12, 16}`. Positions at or below the dead zone snap to a
//! single fragment instead of zero.

use super::DialogOutcome;
use crate::constants::{CONCURRENT, CONCURRENT_DEAD_ZONE, CONCURRENT_MAX};
use crate::preferences::PreferenceStore;
use crate::theme;
use crate::ui::components::{self, FooterAction};
use eframe::egui;
use tracing::info;

/// Fragment count for a slider position.
///
/// `round` is half away from zero, so every position above the dead zone
/// (`position * 4 > 0.5`) yields at least 4. NaN falls in the dead zone.
pub fn count(position: f32) -> i32 {
    if position.is_nan() || position <= CONCURRENT_DEAD_ZONE {
        return 1;
    }
    (position.min(1.0) * 4.0).round() as i32 * 4
}

/// Slider position that reproduces a stored fragment count
pub fn position_for(count: i32) -> f32 {
    if count <= 1 {
        0.0
    } else {
        (count as f32 / CONCURRENT_MAX as f32).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ConcurrentDownloadDialog {
    position: f32,
}

impl ConcurrentDownloadDialog {
    pub fn open(store: &impl PreferenceStore) -> Self {
        Self {
            position: position_for(store.get_int(CONCURRENT)),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn count(&self) -> i32 {
        count(self.position)
    }

    /// Move the slider; returns the count to display
    pub fn on_slide(&mut self, position: f32) -> i32 {
        self.position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        self.count()
    }

    /// Write the quantized count, never the raw position
    pub fn confirm(&self, store: &mut impl PreferenceStore) {
        let count = self.count();
        store.update_int(CONCURRENT, count);
        info!(count, "Concurrent fragments updated");
    }

    pub fn show(&mut self, ctx: &egui::Context, store: &mut impl PreferenceStore) -> DialogOutcome {
        let modal = components::alert_dialog(
            ctx,
            "concurrent_download_dialog",
            egui_phosphor::regular::LIGHTNING,
            "Concurrent download",
            |ui| {
                ui.add(egui::Label::new(
                    egui::RichText::new(format!("Concurrent download: {}", self.count()))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                ).selectable(false));
                ui.add_space(theme::SPACING_MD);

                let mut position = self.position;
                let slider = ui.add(
                    egui::Slider::new(&mut position, 0.0..=1.0)
                        .step_by(0.25)
                        .show_value(false),
                );
                if slider.changed() {
                    self.on_slide(position);
                }

                components::dialog_footer(ui)
            },
        );

        match modal.inner {
            FooterAction::Confirm => {
                self.confirm(store);
                DialogOutcome::Dismissed
            }
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

    #[test]
    fn slider_stops_map_to_counts() {
        assert_eq!(count(0.0), 1);
        assert_eq!(count(0.25), 4);
        assert_eq!(count(0.5), 8);
        assert_eq!(count(0.75), 12);
        assert_eq!(count(1.0), 16);
    }

    #[test]
    fn dead_zone_boundary() {
        assert_eq!(count(0.125), 1);
        assert_eq!(count(0.1251), 4);
        assert_eq!(count(0.13), 4);
        assert_eq!(count(0.2), 4);
    }

    #[test]
    fn never_below_one() {
        let mut p = 0.0f32;
        while p <= 1.0 {
            let c = count(p);
            assert!(c == 1 || (c % 4 == 0 && (4..=16).contains(&c)), "position {p} gave {c}");
            p += 0.001;
        }
    }

    #[test]
    fn out_of_range_positions_are_clamped() {
        assert_eq!(count(-0.5), 1);
        assert_eq!(count(3.0), 16);
    }

    #[test]
    fn non_finite_positions() {
        assert_eq!(count(f32::NAN), 1);
        assert_eq!(count(f32::NEG_INFINITY), 1);
        assert_eq!(count(f32::INFINITY), 16);

        let store = MemoryPreferences::new();
        let mut dialog = ConcurrentDownloadDialog::open(&store);
        assert_eq!(dialog.on_slide(f32::NAN), 1);
        assert_eq!(dialog.position(), 0.0);
    }

    #[test]
    fn inverse_mapping_round_trips_valid_counts() {
        for c in [1, 4, 8, 12, 16] {
            assert_eq!(count(position_for(c)), c);
        }
        assert_eq!(position_for(0), 0.0);
        assert_eq!(position_for(64), 1.0);
    }

    #[test]
    fn opens_from_stored_count() {
        let mut store = MemoryPreferences::new();
        assert_eq!(ConcurrentDownloadDialog::open(&store).count(), 8);

        store.update_int(CONCURRENT, 1);
        let dialog = ConcurrentDownloadDialog::open(&store);
        assert_eq!(dialog.position(), 0.0);
        assert_eq!(dialog.count(), 1);
    }

    #[test]
    fn confirm_writes_quantized_count() {
        let mut store = MemoryPreferences::new();
        let mut dialog = ConcurrentDownloadDialog::open(&store);
        assert_eq!(dialog.on_slide(0.7), 12);
        assert_eq!(store.writes(), 0);

        dialog.confirm(&mut store);
        assert_eq!(store.get_int(CONCURRENT), 12);
    }
}
