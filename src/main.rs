use notification_service::{config, startup::Application};

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Successfully loaded notification service config");

    // Bind listener
    let Ok(app) = Application::build(&cfg).await else {
        return ExitCode::FAILURE;
    };

    // Start server
    if let Err(e) = app.run_until_stopped().await {
        tracing::error!("HTTP server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
