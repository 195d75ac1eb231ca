//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::settings::{AppSettings, RangeCm};
use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera(state);
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for (l, name) in [(Lang::En, "English"), (Lang::Ru, "Русский")] {
                if ui.selectable_label(lang() == l, name).clicked() {
                    set_lang(l);
                    state.settings.ui.language = l;
                    state.settings.save();
                    ui.close_menu();
                }
            }
        });
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window. Changes are applied and saved immediately.
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    let mut changed = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(340.0)
        .show(ctx, |ui| {
            changed |= show_viewport_settings(ui, state);
            changed |= show_range_settings(ui, state);
            changed |= show_ui_settings(ui, state);
            changed |= show_settings_buttons(ui, state);
        });
    // The close button clears the flag from inside the window
    state.show_settings_window &= open;

    if changed {
        match state.session.apply_control_ranges(&state.settings.controls) {
            Ok(()) => state.settings_error = None,
            Err(e) => {
                tracing::warn!("Range change refused: {e}");
                state.settings.controls = state.session.controls.ranges();
                state.settings_error = Some(e.to_string());
            }
        }
        state.settings.save();
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        let changed = ui.color_edit_button_srgba(&mut color).changed();
        if changed {
            *rgb = [color.r(), color.g(), color.b()];
        }
        changed
    })
    .inner
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.viewport"));
    let mut changed = color_row(ui, t("settings.bg_color"), &mut state.settings.viewport.background_color);
    changed |= color_row(ui, t("settings.ground_color"), &mut state.settings.viewport.ground_color);
    ui.add_space(10.0);
    changed
}

fn range_row(ui: &mut egui::Ui, label: &str, range: &mut RangeCm) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut changed = ui
            .add(
                egui::DragValue::new(&mut range.min)
                    .range(1..=range.max)
                    .prefix(format!("{} ", t("settings.min"))),
            )
            .changed();
        changed |= ui
            .add(
                egui::DragValue::new(&mut range.max)
                    .range(range.min..=1000)
                    .prefix(format!("{} ", t("settings.max"))),
            )
            .changed();
        changed
    })
    .inner
}

fn show_range_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.ranges"));
    let controls = &mut state.settings.controls;
    let mut changed = range_row(ui, t("controls.width"), &mut controls.width);
    changed |= range_row(ui, t("controls.height"), &mut controls.height);
    changed |= range_row(ui, t("controls.depth"), &mut controls.depth);
    if let Some(err) = &state.settings_error {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }
    ui.add_space(10.0);
    changed
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.ui"));
    let changed = ui
        .horizontal(|ui| {
            ui.label(t("settings.font_size"));
            ui.add(
                egui::DragValue::new(&mut state.settings.ui.font_size)
                    .speed(0.5)
                    .range(8.0..=24.0)
                    .suffix(" pt"),
            )
            .changed()
        })
        .inner;
    ui.add_space(10.0);
    changed
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.separator();
    ui.horizontal(|ui| {
        let mut reset = false;
        if ui.button(t("settings.reset")).clicked() {
            let language = state.settings.ui.language;
            state.settings = AppSettings::default();
            state.settings.ui.language = language;
            reset = true;
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
        reset
    })
    .inner
}
