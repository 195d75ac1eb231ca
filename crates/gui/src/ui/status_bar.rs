use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    let chain = &state.session.chain;
    ui.horizontal(|ui| {
        ui.weak(format!("{}: {}", t("status.modules"), chain.len()));

        ui.separator();

        match chain.selected_index() {
            Some(i) => ui.label(format!("{}: #{}", t("status.selected"), i + 1)),
            None => ui.weak(format!("{}: {}", t("status.selected"), t("status.none"))),
        };

        ui.separator();

        let total_cm = shared::m_to_cm(chain.total_width());
        ui.label(format!("{}: {total_cm} cm", t("status.total")));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("modchain v", env!("CARGO_PKG_VERSION")));
        });
    });
}
