//! Search screen rendering (search bar and the state-dependent body)

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::{SubmitOutcome, ViewState};
use crate::ui::components::{
    error_placeholder, loading_indicator, placeholder_text, quote_card,
};
use crate::utils::format_result_count;
use eframe::egui;

impl App {
    pub(crate) fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut clear = false;

        theme::search_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let search_btn = ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        )
                        .frame(false),
                    )
                    .on_hover_text("Search");
                submit |= search_btn.clicked();

                let mut text = self.controller.query().to_string();
                let has_text = !text.is_empty();
                let clear_width = if has_text { 24.0 } else { 0.0 };
                let search_id = ui.make_persistent_id("search_box");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .id(search_id)
                        .hint_text(SEARCH_HINT)
                        .frame(false)
                        .desired_width(ui.available_width() - clear_width),
                );
                if response.changed() {
                    self.controller.set_query(text);
                }
                if self.focus_search {
                    self.focus_search = false;
                    response.request_focus();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                if has_text {
                    clear |= ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(egui_phosphor::regular::X)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_DIM),
                            )
                            .frame(false),
                        )
                        .on_hover_text("Clear")
                        .clicked();
                }
            });
        });

        if clear {
            self.controller.clear_query();
            self.focus_search = true;
        }
        // A blank submit sends the user back to the input
        if submit && self.controller.submit_search() == SubmitOutcome::EmptyQuery {
            self.focus_search = true;
        }
    }

    pub(crate) fn render_body(&mut self, ui: &mut egui::Ui) {
        let mut retry = false;

        match self.controller.state() {
            ViewState::Loading => loading_indicator(ui, LOADING_TEXT),
            ViewState::Error(message) => retry = error_placeholder(ui, message),
            ViewState::Idle => placeholder_text(ui, IDLE_HINT),
            ViewState::Results(quotes) if quotes.is_empty() => placeholder_text(ui, NOTHING_FOUND),
            ViewState::Results(quotes) => {
                ui.label(
                    egui::RichText::new(format_result_count(quotes.len()))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_SM);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for quote in quotes {
                            quote_card(ui, quote);
                            ui.add_space(theme::SPACING_MD);
                        }
                    });
            }
        }

        if retry {
            self.controller.retry();
        }
    }
}
