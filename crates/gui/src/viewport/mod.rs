//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
pub use modchain_gui_lib::viewport::{camera, mesh, scene};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use camera::{screen_to_ndc, ArcBallCamera};
use gl_renderer::{GlRenderer, RenderParams};

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self { gl_renderer: None }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable: {e}"),
        }
    }

    /// Release GL resources while the context is still alive
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self, state: &mut AppState) {
        let vs = &state.settings.viewport;
        state.session.scene.camera = ArcBallCamera::from_settings(vs.camera_eye, vs.fov_degrees);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        if rect.height() > 0.0 {
            state.session.scene.set_aspect(rect.width() / rect.height());
        }

        // ── Camera controls ─────────────────────────────
        let camera = &mut state.session.scene.camera;
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            camera.pan(delta.x * 0.01, delta.y * 0.01);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                camera.zoom(scroll * 0.01);
            }
        }

        // ── Module selection via click ──────────────────
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                state.session.pick_at(screen_to_ndc(pos, rect));
            }
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, state);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            ui.painter().rect_filled(rect, 0.0, bg_color32(state));
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let scene = &state.session.scene;
        let camera = scene.camera;
        let items = scene.draw_list();
        let vs = &state.settings.viewport;
        let params = RenderParams {
            viewport: [0.0; 4],
            bg_color: vs.background_color,
            ground_color: vs.ground_color,
            ground_size: vs.ground_size,
            light_direction: vs.light_direction,
        };

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let params = RenderParams {
                    viewport: [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ],
                    ..params
                };

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_ground(gl, params.ground_size);
                    r.sync_geometries(gl, &items);
                    r.paint(gl, &camera, &items, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }
}

fn bg_color32(state: &AppState) -> egui::Color32 {
    let [r, g, b] = state.settings.viewport.background_color;
    egui::Color32::from_rgb(r, g, b)
}
