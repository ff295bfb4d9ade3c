//! Toast notification (bottom-right of the central panel)

use super::App;
use crate::theme;
use crate::ui::components::toast_alpha;
use eframe::egui;
use std::time::Instant;

impl App {
    /// Visible for a few seconds then fades; the timer pauses while hovered.
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let Some((elapsed, message)) = self
            .toast
            .as_ref()
            .map(|n| (n.raised_at.elapsed().as_secs_f32(), n.message.clone()))
        else {
            return;
        };

        let Some(alpha) = toast_alpha(elapsed) else {
            self.toast = None;
            return;
        };

        let margin = theme::SPACING_LG;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("notice_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.label(egui::RichText::new(message).color(
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                    ));
                });
            });

        if response.response.hovered() {
            if let Some(notice) = &mut self.toast {
                notice.raised_at = Instant::now();
            }
        }
        ctx.request_repaint();
    }
}
