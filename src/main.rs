use dotenv::dotenv;
use standup::commands::Cli;
use standup::libs::messages::macros::is_debug_mode;
use standup::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("standup=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry STANDUP_DEBUG and RTM credentials, so load it first
    let _ = dotenv();
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
