//! Main application module

mod menus;
mod styles;

use eframe::egui;

use crate::i18n::set_lang;
use crate::state::AppState;
use crate::ui::{controls_panel, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct ConfiguratorApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl ConfiguratorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup_script: Option<String>) -> Self {
        let mut state = AppState::default();
        set_lang(state.settings.ui.language);

        if let Some(json) = startup_script {
            run_script(&mut state, &json);
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

/// Replay a JSON command batch against the live session
fn run_script(state: &mut AppState, json: &str) {
    match crate::command::execute_json_batch(&mut state.session, json) {
        Ok(responses) => {
            for (i, resp) in responses.iter().enumerate() {
                if resp.success {
                    tracing::info!("script[{i}]: {}", resp.data.clone().unwrap_or_default());
                } else {
                    tracing::warn!("script[{i}] failed: {}", resp.error.as_deref().unwrap_or(""));
                }
            }
        }
        Err(e) => tracing::error!("Startup script rejected: {e}"),
    }
}

impl eframe::App for ConfiguratorApp {
    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: dimension sliders ────────────────────
        egui::SidePanel::left("controls")
            .default_width(260.0)
            .width_range(200.0..=400.0)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                controls_panel::show(ui, &mut self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
