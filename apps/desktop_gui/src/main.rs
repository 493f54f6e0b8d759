mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime::spawn_backend_worker;
use crate::config::load_settings;
use crate::controller::events::UiEvent;
use crate::ui::ContactDeskApp;

#[derive(Debug, Parser)]
#[command(name = "contact-desk", about = "Desktop contact form client")]
struct Cli {
    /// Submission endpoint override (takes precedence over file and env).
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = load_settings(cli.endpoint);
    tracing::info!(endpoint = %settings.endpoint_url, "starting contact desk");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    spawn_backend_worker(settings.endpoint_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contact Desk")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contact Desk",
        options,
        Box::new(|_cc| Ok(Box::new(ContactDeskApp::new(cmd_tx, ui_rx)))),
    )
}
