// ABOUTME: Main entry point for the TubeShare TUI application

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    Terminal,
};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use tubeshare::app::{App, EventHandler, Route};
use tubeshare::components::LayoutComponent;
use tubeshare::config::{AppConfig, ConfigOverrides};

/// Search video channels and curate them into shareable lists.
#[derive(Debug, Parser)]
#[command(name = "tubeshare", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the TubeShare service
    #[arg(long)]
    base_url: Option<String>,

    /// Delay in milliseconds before a typed search is sent
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Cookie header value carrying an existing session
    #[arg(long)]
    session_cookie: Option<String>,

    /// Screen to open first: /, /signin or /dashboard
    #[arg(long, default_value = "/", value_parser = parse_route)]
    route: Route,
}

fn parse_route(path: &str) -> Result<Route, String> {
    Route::from_path(path).ok_or_else(|| format!("unknown route {}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();
    setup_panic_handler();

    let config = AppConfig::load(
        cli.config.as_deref(),
        ConfigOverrides {
            base_url: cli.base_url,
            debounce_ms: cli.debounce_ms,
            session_cookie: cli.session_cookie,
        },
    )
    .context("Failed to load configuration")?;

    let mut app = App::new(&config).context("Failed to create HTTP client")?;
    app.state.navigate(cli.route);
    app.init().await;
    let mut layout = LayoutComponent::with_base_url(app.client().base_url().as_str());

    run_tui(&mut app, &mut layout).await?;

    Ok(())
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Short tick so the search debounce fires close to its deadline
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            match app.tick().await {
                Ok(()) => {
                    last_tick = Instant::now();

                    if app.needs_ui_refresh() {
                        terminal.draw(|frame| {
                            layout.render(frame, &app.state);
                        })?;
                    }
                }
                Err(e) => {
                    tracing::error!("Error during app tick: {}", e);
                    // Continue running instead of crashing
                    last_tick = Instant::now();
                }
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "tubeshare-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        eprintln!("Could not open log file {:?}, logging disabled", log_file);
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubeshare=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
