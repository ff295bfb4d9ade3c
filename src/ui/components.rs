//! Reusable UI components
//!
//! Stateless pieces the search screen is assembled from.

use crate::theme;
use crate::types::Quote;
use eframe::egui;

/// Gray hint text centered in the remaining space
pub fn placeholder_text(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_DIM),
        );
    });
}

/// Spinner with a caption, centered
pub fn loading_indicator(ui: &mut egui::Ui, text: &str) {
    ui.add_space((ui.available_height() / 2.0 - 24.0).max(0.0));
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new(text).color(theme::TEXT_MUTED));
    });
}

/// Error message with a retry button. Returns true if retry was clicked.
pub fn error_placeholder(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.add_space((ui.available_height() / 2.0 - 48.0).max(0.0));
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(message)
                    .size(theme::FONT_BODY)
                    .color(theme::STATUS_ERROR),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_LG);
        let (w, h) = theme::RETRY_BUTTON_SIZE;
        retry = ui
            .add_sized(
                [w, h],
                theme::button_accent(format!(
                    "{} Retry",
                    egui_phosphor::regular::ARROW_CLOCKWISE
                )),
            )
            .clicked();
    });
    retry
}

/// A single quote: content, then the attribution line
pub fn quote_card(ui: &mut egui::Ui, quote: &Quote) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(&quote.content)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(attribution(&quote.author))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        );
    });
}

/// "- author" line under a quote
pub fn attribution(author: &str) -> String {
    format!("- {}", author)
}

/// Toast opacity after `elapsed` seconds: fully visible, then a linear fade.
/// `None` once the toast should be removed.
pub fn toast_alpha(elapsed: f32) -> Option<f32> {
    let total = theme::TOAST_VISIBLE_SECS + theme::TOAST_FADE_SECS;
    if elapsed >= total {
        None
    } else if elapsed > theme::TOAST_VISIBLE_SECS {
        Some((total - elapsed) / theme::TOAST_FADE_SECS)
    } else {
        Some(1.0)
    }
}
