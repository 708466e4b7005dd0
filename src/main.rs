mod app;
mod domain;
mod input;
mod logging;
mod settings;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::{Overrides, Settings};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A terminal focus timer with a work/break cycle and a daily checklist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file. Defaults to <config dir>/focusflow/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Focus block length in minutes (overrides the settings file)
    #[arg(short, long)]
    work_minutes: Option<u32>,

    /// Break length in minutes (overrides the settings file)
    #[arg(short, long)]
    break_minutes: Option<u32>,

    /// Start with the light palette
    #[arg(long)]
    light: bool,

    /// Start with an empty checklist
    #[arg(long)]
    no_seed: bool,

    /// Use plain ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Settings::default_path()?,
    };

    match cli.command {
        Some(Commands::Init { force }) => {
            Settings::default().save_to_path(&config_path, force)?;
            println!("Wrote default settings: {}", config_path.display());
            Ok(())
        }
        None => {
            let overrides = Overrides {
                work_minutes: cli.work_minutes,
                break_minutes: cli.break_minutes,
                light: cli.light,
                no_seed: cli.no_seed,
                ascii: cli.ascii,
            };
            run_tui(&config_path, &overrides)
        }
    }
}

fn run_tui(config_path: &std::path::Path, overrides: &Overrides) -> Result<()> {
    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = match logging::init_logging() {
        Ok((_, guard)) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let settings = Settings::load(config_path)
        .with_overrides(overrides)
        .context("Invalid command-line override")?;
    tracing::info!(?settings, "starting");

    let mut app = AppState::new(&settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    tracing::info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but never past the next countdown tick
        let timeout = app.ticker.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Reissue or cancel the pending tick after any state change, then run it if due
        app.drive(Instant::now());
    }
}
