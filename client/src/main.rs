mod colors;
mod config;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;

use engine::logger::init_logger;
use state::SharedState;
use ui::MenuApp;

#[derive(Parser)]
#[command(name = "snake_client", about = "Single-player snake with a menu shell")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(None);
    let args = Args::parse();

    let config_manager = match args.config.as_deref() {
        Some(path) => config::manager_for_path(path),
        None => config::get_config_manager(),
    };

    let shared_state = SharedState::new();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(|_cc| Ok(Box::new(MenuApp::new(shared_state, config_manager)))),
    )?;

    Ok(())
}
