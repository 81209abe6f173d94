use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use swatch::app::App;
use swatch::catalog::{self, CatalogSource};
use swatch::contrast::{self, TextColor};
use swatch::events::{self, AppEvent};
use swatch::ui;

#[derive(Parser, Debug)]
#[command(name = "swatch", about = "Preview a remote color catalog in the terminal")]
struct Cli {
    /// Catalog endpoint to fetch.
    #[arg(long, default_value = catalog::DEFAULT_URL)]
    url: String,

    /// Load the catalog from a local JSON file instead of the network.
    #[arg(long)]
    colors_file: Option<PathBuf>,

    /// Print the catalog to stdout instead of launching the TUI.
    #[arg(long)]
    dump: bool,

    /// Write diagnostics to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let source = match cli.colors_file {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Url(cli.url),
    };

    if cli.dump {
        return dump_catalog(&source);
    }

    // Launch TUI.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_tui(&mut terminal, &mut app, source);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: CatalogSource,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn key reader thread.
    events::spawn_key_reader(tx.clone());

    // Spawn tick timer (250ms).
    events::spawn_tick_timer(tx.clone(), Duration::from_millis(250));

    // Kick off the one-shot catalog fetch.
    events::spawn_catalog_fetcher(tx, source);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::CatalogLoaded(catalog)) => app.set_catalog(catalog),
            Ok(AppEvent::Tick) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn dump_catalog(source: &CatalogSource) -> Result<()> {
    let catalog = source.load()?;
    println!("{} colors", catalog.len());
    println!();

    for record in &catalog.records {
        // Every record's hex survived validation at the parse boundary.
        let text = match contrast::text_color(&record.hex_code) {
            Ok(TextColor::Black) => "black",
            Ok(TextColor::White) => "white",
            Err(_) => "?",
        };
        println!(
            "  {:<24} #{}  [{}]  {} text",
            record.name, record.hex_code, record.color_code, text
        );
    }

    Ok(())
}
