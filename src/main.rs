#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sketchbook::{SessionLabel, SketchApp, SketchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SketchConfig::from_env()?;
    // The journal is named after the moment the session starts
    let label = SessionLabel::now();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketchbook")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchbook",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config, label)))),
    )?;
    Ok(())
}
