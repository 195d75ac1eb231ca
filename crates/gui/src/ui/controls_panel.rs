//! Dimension sliders for the selected module

use egui::Ui;
use shared::ControlKind;

use crate::i18n::t;
use crate::state::AppState;

fn control_label(kind: ControlKind) -> &'static str {
    match kind {
        ControlKind::Width => t("controls.width"),
        ControlKind::Height => t("controls.height"),
        ControlKind::Depth => t("controls.depth"),
    }
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let session = &mut state.session;

    match session.chain.selected_index() {
        Some(i) => ui.heading(format!("{} #{}", t("controls.title"), i + 1)),
        None => ui.heading(t("controls.title")),
    };
    ui.separator();

    egui::Grid::new("dimension_sliders")
        .num_columns(3)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for &kind in ControlKind::all() {
                ui.label(control_label(kind));

                let slider = session.controls.slider_mut(kind);
                let range = slider.range();
                let changed = ui
                    .add(egui::Slider::new(slider.value_mut(), range.min..=range.max).show_value(false))
                    .changed();
                ui.monospace(slider.label());
                ui.end_row();

                if changed {
                    session.on_control_changed(kind);
                }
            }
        });

    ui.add_space(12.0);
    ui.weak(t("controls.hint"));
    ui.weak(t("controls.click_hint"));
}
