//! App module - contains the main application state and logic

mod controller;
mod toast;
mod views;

pub use controller::SearchController;

use crate::api::QuoteApi;
use crate::settings::Settings;
use crate::theme;
use crate::types::Notice;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: SearchController,
    pub(crate) toast: Option<Notice>,
    pub(crate) focus_search: bool,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    // Fetches run here; must outlive the controller's spawned tasks
    pub(crate) _runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: Arc<dyn QuoteApi>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        // Completions arrive off the UI thread; wake the event loop so they get polled
        let ctx = cc.egui_ctx.clone();
        let controller = SearchController::new(api, runtime.handle().clone(), settings.result_limit)
            .with_waker(Arc::new(move || ctx.request_repaint()));

        Self {
            controller,
            toast: None,
            focus_search: true,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
            _runtime: runtime,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
