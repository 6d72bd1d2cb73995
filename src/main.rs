use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

mod app;
mod config;
mod error;
mod layout;
mod poller;
mod suggestions;
mod theme;

use app::App;
use config::Config;

/// Floating terminal overlay fed by a local suggestion backend
#[derive(Parser, Debug)]
#[command(name = "ambient")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend endpoint to poll
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// Seconds between polls
    #[arg(long, short = 'i')]
    interval: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, short = 't')]
    timeout: Option<u64>,

    /// Read configuration from this file instead of the default path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    // The poller thread feeds updates over one channel; the other asks
    // it to stop on exit
    let (update_tx, update_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let handle = poller::spawn_poller(config.poller.clone(), update_tx, shutdown_rx);

    let mut app = App::new(config);
    app.connect_poller(update_rx, shutdown_tx, handle);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();

    // Mouse capture is best-effort; the overlay stays keyboard-driven
    // without it
    let _ = execute!(io::stdout(), EnableMouseCapture);

    let result = run(&mut terminal, &mut app);

    let _ = execute!(io::stdout(), DisableMouseCapture);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    app.shutdown_poller();

    result
}

/// Resolve the effective configuration: file first, flags on top
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::read_config_file(path)?,
        None => config::load_config(),
    };

    if let Some(url) = &args.url {
        config.poller.url = url.clone();
    }
    if let Some(interval) = args.interval {
        config.poller.interval_secs = interval;
    }
    if let Some(timeout) = args.timeout {
        config.poller.timeout_secs = timeout;
    }

    Ok(config)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Apply poller updates and handle at most one input event
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
