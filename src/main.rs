use dreamwalker::config::AppConfig;
use dreamwalker::engine::llm_client::GeminiClient;
use dreamwalker::error::ConfigError;
use dreamwalker::{logging, ui};

fn main() -> anyhow::Result<()> {
    logging::init();

    let client = match AppConfig::from_env().and_then(|config| {
        tracing::info!(?config, "configuration loaded");
        GeminiClient::new(&config)
    }) {
        Ok(client) => client,
        Err(e) => {
            report_fatal(&e);
            return Err(e.into());
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("DreamWalker 🌙")
            .with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DreamWalker",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::DreamWalkerApp::new(Box::new(client))))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

fn report_fatal(e: &ConfigError) {
    tracing::error!("startup failed: {e}");
    eprintln!("❌ {e}");

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("DreamWalker cannot start")
        .set_description(format!("❌ {e}"))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
