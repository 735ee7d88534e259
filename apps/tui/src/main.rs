mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use lightsched_tui::http::{ReqwestTransport, SharedTransport};
use lightsched_tui::{status_store, AppConfig, CascadeClient, CascadeController, Locator, StatusPoller};
use logging::LogTarget;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::from_env()?;
    let headless = args.headless || !is_terminal();
    let target = if headless {
        LogTarget::Headless
    } else {
        LogTarget::Terminal
    };
    logging::init_logger(config.debug, args.log_file.as_deref(), target)?;
    tracing::debug!(?config, headless, "configuration loaded");

    let transport: SharedTransport = Arc::new(ReqwestTransport::new(config.request_timeout)?);
    let locator = Locator::new(transport, config.discovery_url.clone());
    let (writer, store) = status_store();
    let poller = StatusPoller::new(locator.clone(), writer, config.poll_interval);
    let client = CascadeClient::new(locator);

    if headless {
        return event::run_headless(
            &client,
            &poller,
            &args.query(),
            &config.date_format,
            args.json,
        )
        .await;
    }

    let poll_task = poller.spawn();
    let (controller, completions) = CascadeController::new(client);
    let mut app = App::new(controller, completions, store, &config.date_format);
    app.bootstrap(&args.route);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);
    poll_task.abort();

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
