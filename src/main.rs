mod action;
mod app;
mod calendar;
mod config;
mod event;
mod form;
mod input;
mod quotes;
mod reminders;
mod selection;
mod store;
mod tasks;
mod ui;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self as term_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "bestcal")]
#[command(about = "Terminal calendar for exams, homework and quizzes")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/best-calendar/config.toml")]
    config: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Date to open the calendar on (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bestcal=warn".into());
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }

    // Load config
    let config = Config::load(&cli.config)?;
    tracing::debug!("Default config location is {}", Config::default_path().display());
    let initial = match cli.date {
        Some(date) => date,
        None => config.initial_date()?,
    };
    tracing::info!("Opening calendar on {}", initial);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config, initial);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        "Exiting with {} events and {} reminders",
        app.store().len(),
        app.reminders().len()
    );
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if term_event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = term_event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(action) = input::action_for_key(app, &key) {
                    app.dispatch(action);
                }

                if app.should_quit() {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_date_flag() {
        let cli = Cli::try_parse_from(["bestcal", "--date", "2025-03-22"]).unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 3, 22));
        assert_eq!(cli.config, "~/.config/best-calendar/config.toml");
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["bestcal", "--date", "22/03/2025"]).is_err());
    }
}
