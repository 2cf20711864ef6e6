use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use devpick::api::HttpDeviceApi;
use devpick::app::App;
use devpick::config;
use devpick::error::DevpickError;
use devpick::{compare, suggest};

/// Interactive device comparison picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive device comparison picker with live search suggestions"
)]
struct Args {
    /// Base URL of the device API (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/devpick-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/devpick-debug.log")
            .expect("Failed to open /tmp/devpick-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DEVPICK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // Load config early; a broken file falls back to defaults with a warning
    let config_result = config::load_config();
    let mut config = config_result.config;
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }

    let base_url = validate_api_url(&config.api.base_url)?;

    let terminal = init_terminal()?;

    let mut app = App::new(&config);
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_workers(&mut app, &base_url)?;

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DEVPICK DEBUG SESSION ENDED ===");

    Ok(())
}

/// Reject URLs the HTTP client could never use before entering the TUI
fn validate_api_url(base_url: &str) -> Result<String, DevpickError> {
    reqwest::Url::parse(base_url).map_err(|_| DevpickError::InvalidApiUrl(base_url.to_string()))?;
    Ok(base_url.to_string())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture, and
/// bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(
                stdout(),
                DisableBracketedPaste,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

/// Spawn one lookup worker per picker and the compare worker
fn setup_workers(app: &mut App, base_url: &str) -> Result<()> {
    let client = HttpDeviceApi::new(base_url)?;

    for picker in &mut app.pickers {
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();
        picker.set_channels(request_tx, response_rx);
        suggest::worker::spawn_worker(client.clone(), request_rx, response_tx);
    }

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.compare.set_channels(request_tx, response_rx);
    compare::spawn_worker(client, request_rx, response_tx);

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
