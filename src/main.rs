use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, Frontend};
use connect_four::ui::{App, TextUi};

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI regardless of the configured frontend
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.tui {
        config.frontend = Frontend::Tui;
    }

    info!("starting {:?} frontend", config.frontend);
    match config.frontend {
        Frontend::Text => run_text(config),
        Frontend::Tui => run_tui().context("running terminal UI"),
    }
}

fn run_text(config: AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut ui = TextUi::new(stdin.lock(), io::stdout(), config.display);
    let outcome = ui.play().context("playing in text mode")?;
    info!("game finished: {outcome:?}");
    Ok(())
}

fn run_tui() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
