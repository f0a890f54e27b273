//! Aidboard — aid-distribution package-management dashboard.
//!
//! Renders a read-only dataset (built-in sample or a JSON file) in a
//! tabbed terminal UI. The initial tab is selectable with `--tab`;
//! unrecognized identifiers fall back to the package list.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use aidboard_core::Dataset;
use aidboard_tui::app::{AppState, Tab};
use aidboard_tui::{input, ui};

#[derive(Parser)]
#[command(name = "aidboard", about = "Aidboard — package-management dashboard")]
struct Cli {
    /// Initial tab identifier (packages-list, bulk-send, individual-send,
    /// tracking, distribution-reports). Unrecognized values open the list.
    #[arg(long, default_value = "packages-list")]
    tab: String,

    /// JSON dataset file. Omit to use the built-in sample data.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load data before touching the terminal so errors print normally.
    let dataset = match &cli.data {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("loading dataset from {}", path.display()))?,
        None => Dataset::sample(),
    };

    let mut app = AppState::new(dataset, Tab::from_slug(&cli.tab));
    app.set_status(format!(
        "تم تحميل {} طرد و{} مستفيد",
        app.dataset.packages.len(),
        app.dataset.beneficiaries.len()
    ));

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
