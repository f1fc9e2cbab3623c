use dotenv::dotenv;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tsheet::commands::Cli;
use tsheet::libs::messages::macros::is_debug_mode;
use tsheet::msg_error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsheet=debug")))
            .with_target(false)
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(format!("{:#}", error));
            ExitCode::FAILURE
        }
    }
}
