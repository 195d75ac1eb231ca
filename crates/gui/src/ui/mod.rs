pub mod controls_panel;
pub mod status_bar;
