//! Reusable UI components
//!
//! Dialog chrome, buttons and settings rows shared by the settings page
//! and the three network dialogs.

use crate::theme;
use eframe::egui;

/// Which footer button was clicked this frame, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    None,
    Dismiss,
    Confirm,
}

/// Centered alert-style modal: icon, title, then caller content.
pub fn alert_dialog<R>(
    ctx: &egui::Context,
    id: &str,
    icon: &str,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::ModalResponse<R> {
    egui::Modal::new(egui::Id::new(id))
        .backdrop_color(egui::Color32::from_black_alpha(120))
        .frame(theme::modal_frame())
        .show(ctx, |ui| {
            ui.set_width(theme::DIALOG_WIDTH);
            ui.vertical_centered(|ui| {
                ui.add(egui::Label::new(
                    egui::RichText::new(icon).size(24.0).color(theme::ACCENT),
                ).selectable(false));
                ui.add_space(theme::SPACING_SM);
                ui.add(egui::Label::new(
                    egui::RichText::new(title).size(theme::FONT_HEADING + 4.0).strong(),
                ).selectable(false));
            });
            ui.add_space(theme::SPACING_LG);
            add_contents(ui)
        })
}

/// Body paragraph under the dialog title
pub fn description(ui: &mut egui::Ui, text: &str) {
    ui.add(egui::Label::new(
        egui::RichText::new(text).size(theme::FONT_BODY).color(theme::TEXT_SECONDARY),
    ).wrap());
}

/// Line under an input; empty when there is nothing to report
pub fn supporting_text(ui: &mut egui::Ui, text: &str, is_error: bool) {
    let color = if is_error { theme::STATUS_ERROR } else { theme::TEXT_MUTED };
    ui.add(egui::Label::new(
        egui::RichText::new(text).size(theme::FONT_SMALL).color(color),
    ).selectable(false));
}

/// Square icon-only button (close, paste). Hover tints the background.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, tooltip: &str) -> egui::Response {
    let size = theme::ICON_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let color = if response.hovered() {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        theme::ACCENT
    } else {
        theme::TEXT_MUTED
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(16.0),
        color,
    );
    response.on_hover_text(tooltip)
}

/// Flat text button with a leading icon, accent colored. Returns true if clicked.
pub fn text_button_with_icon(ui: &mut egui::Ui, icon: &str, text: &str) -> bool {
    let label = format!("{}  {}", icon, text);
    let galley = ui.painter().layout_no_wrap(
        label,
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::ACCENT,
    );
    let size = egui::vec2(galley.size().x + 2.0 * theme::SPACING_LG, theme::BUTTON_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
    }
    let text_pos = egui::pos2(rect.min.x + theme::SPACING_LG, rect.center().y - galley.size().y / 2.0);
    ui.painter().galley(text_pos, galley, theme::ACCENT);
    response.clicked()
}

/// Dismiss + Confirm buttons, right aligned
pub fn dialog_footer(ui: &mut egui::Ui) -> FooterAction {
    let mut action = FooterAction::None;
    ui.add_space(theme::SPACING_MD);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if painted_button(ui, "Confirm", theme::BTN_ACCENT, egui::Color32::from_rgb(0x04, 0x2f, 0x2e)) {
            action = FooterAction::Confirm;
        }
        if painted_button(ui, "Dismiss", theme::BTN_DEFAULT, egui::Color32::WHITE) {
            action = FooterAction::Dismiss;
        }
    });
    action
}

fn painted_button(ui: &mut egui::Ui, text: &str, base: egui::Color32, text_color: egui::Color32) -> bool {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(84.0, theme::BUTTON_HEIGHT), egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let (fill, draw_rect) = theme::button_visual(&response, base, rect);
    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
    ui.painter().text(
        draw_rect.center(), egui::Align2::CENTER_CENTER,
        text, egui::FontId::proportional(theme::FONT_LABEL),
        text_color,
    );
    response.clicked()
}

/// Clickable settings entry: icon, title and a one-line summary of the current value.
pub fn settings_row(ui: &mut egui::Ui, icon: &str, title: &str, summary: &str, enabled: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::ROW_HEIGHT),
        if enabled { egui::Sense::click() } else { egui::Sense::hover() },
    );
    if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
    }

    let painter = ui.painter();
    let (title_color, icon_color) = if enabled {
        (theme::TEXT_PRIMARY, theme::ACCENT)
    } else {
        (theme::TEXT_DIM, theme::TEXT_DIM)
    };
    painter.text(
        egui::pos2(rect.min.x + theme::SPACING_LG, rect.center().y),
        egui::Align2::LEFT_CENTER,
        icon,
        egui::FontId::proportional(20.0),
        icon_color,
    );
    let text_x = rect.min.x + theme::SPACING_LG + 36.0;
    painter.text(
        egui::pos2(text_x, rect.center().y - 1.0),
        egui::Align2::LEFT_BOTTOM,
        title,
        egui::FontId::proportional(theme::FONT_BODY),
        title_color,
    );
    painter.text(
        egui::pos2(text_x, rect.center().y + 1.0),
        egui::Align2::LEFT_TOP,
        summary,
        egui::FontId::proportional(theme::FONT_SMALL + 1.0),
        theme::TEXT_MUTED,
    );
    response
}

/// Accent section header, as used in the settings modal
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add(egui::Label::new(
        egui::RichText::new(text).size(theme::FONT_LABEL).color(theme::ACCENT),
    ).selectable(false));
    ui.add_space(theme::SPACING_XS);
}
