mod app;
mod input;
mod message;
mod style;
mod view;

use app::Gatze;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Gatze"),
        ..Default::default()
    };

    eframe::run_native(
        "Gatze",
        options,
        Box::new(|cc| Ok(Box::new(Gatze::new(cc)))),
    )
}
