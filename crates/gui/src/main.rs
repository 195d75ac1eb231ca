mod app;
mod ui;
mod viewport;

pub use modchain_gui_lib::{command, i18n, state};

use app::ConfiguratorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modchain_gui=info,modchain_gui_lib=info".into()),
        )
        .init();

    // Parse --script <path> argument
    let startup_script = parse_script_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Module Chain Configurator")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "modchain-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(ConfiguratorApp::new(cc, startup_script)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Contents of the JSON command batch passed with `--script <path>`
fn parse_script_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--script" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => {
                    tracing::info!("Loaded startup script from {path}");
                    return Some(json);
                }
                Err(e) => {
                    tracing::error!("Failed to read script file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
