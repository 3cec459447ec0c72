mod app;
mod scene;
mod settings;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> eframe::Result<()> {
    if let Err(err) = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger init failed: {err}");
    }
    log::info!("starting mecanum dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("Mecanum Drive Dashboard"),
        ..Default::default()
    };
    eframe::run_native(
        "Mecanum Drive Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app::DashApp::new()))),
    )
}
