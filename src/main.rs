mod app;
mod data;
mod model;
mod query;
mod samples;
mod theme;
mod ui;
mod video;
mod viewmodel;

use app::{App, InputMode, Section};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use data::{DEFAULT_BASE_URL, DataSource};
use std::io::Write;
use std::path::PathBuf;
use theme::Preferences;

/// TUI explorer for a creator portfolio catalog served as static JSON
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL for the catalog endpoints (fallback if no subcommand)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Skip fetching and browse the embedded sample catalog
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI explorer (default)
    Run {
        /// Base URL for the catalog endpoints
        #[arg(short, long)]
        base_url: Option<String>,

        /// Skip fetching and browse the embedded sample catalog
        #[arg(long)]
        offline: bool,
    },
    /// Fetch the catalog and write it to local JSON files
    Snapshot {
        /// Directory the JSON files are written into
        #[arg(short, long)]
        output: PathBuf,

        /// Base URL for the catalog endpoints
        #[arg(short, long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Normalize command
    let command = match cli.command {
        Some(c) => c,
        None => Commands::Run {
            base_url: cli.base_url,
            offline: cli.offline,
        },
    };

    match command {
        Commands::Snapshot { output, base_url } => {
            let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            eprintln!("Fetching catalog from {base} ...");
            let source = DataSource::new(base);
            let catalog = match source.fetch_all().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };

            std::fs::create_dir_all(&output)?;
            std::fs::write(
                output.join("projects.json"),
                serde_json::to_string_pretty(&catalog.projects)?,
            )?;
            std::fs::write(
                output.join("games.json"),
                serde_json::to_string_pretty(&catalog.games)?,
            )?;
            std::fs::write(
                output.join("testimonials.json"),
                serde_json::to_string_pretty(&catalog.testimonials)?,
            )?;
            eprintln!(
                "Wrote {} projects, {} games, {} testimonials to {}",
                catalog.projects.len(),
                catalog.games.len(),
                catalog.testimonials.len(),
                output.display()
            );
        }
        Commands::Run { base_url, offline } => {
            let prefs = Preferences::load();
            let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let source = DataSource::new(base);

            // Catalog and avatar fetches run concurrently and gate the
            // first render. Failures degrade to samples/placeholder.
            let (catalog, avatar_url) = if offline {
                (samples::catalog(), None)
            } else {
                tokio::join!(source.load(), source.avatar_url())
            };

            let mut app = App::new(catalog, avatar_url, prefs.theme);

            // Init terminal
            let mut terminal = ratatui::init();

            // Main loop
            let result = run_app(&mut terminal, &mut app);

            // Restore terminal
            ratatui::restore();

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Short poll so the debounced search applies between keystrokes.
        if crossterm::event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        app.tick();
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') && app.input_mode == InputMode::Normal {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.close_overlays();
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_search_input(app, key);
        return;
    }

    if app.overlay.is_some() {
        handle_overlay_key(app, key);
        return;
    }

    // Section switching and global toggles
    match key.code {
        KeyCode::Tab => {
            app.section = app.section.next();
            return;
        }
        KeyCode::BackTab => {
            app.section = app.section.prev();
            return;
        }
        KeyCode::Char('1') => {
            app.section = Section::Work;
            return;
        }
        KeyCode::Char('2') => {
            app.section = Section::Games;
            return;
        }
        KeyCode::Char('3') => {
            app.section = Section::Reviews;
            return;
        }
        KeyCode::Char('T') => {
            app.toggle_theme();
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.section {
        Section::Work => handle_work_key(app, key),
        Section::Games => handle_games_key(app, key),
        Section::Reviews => handle_reviews_key(app, key),
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.commit_search();
        }
        KeyCode::Esc => {
            // Leave edit mode; a pending debounce still applies via tick().
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.mark_search_dirty();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.mark_search_dirty();
        }
        _ => {}
    }
}

fn handle_work_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.work_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.work_prev();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.chip_left();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.chip_right();
        }
        KeyCode::Char(' ') => {
            app.toggle_chip();
        }
        KeyCode::Char('s') => {
            app.cycle_sort();
        }
        KeyCode::Char('v') => {
            app.toggle_view();
        }
        KeyCode::Char('m') => {
            app.load_more();
        }
        KeyCode::Char('g') => {
            app.work_first();
        }
        KeyCode::Char('G') => {
            app.work_last();
        }
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Esc => {
            // Clear search first, then filters
            if !app.search_input.is_empty() || !app.controls.search.is_empty() {
                app.search_input.clear();
                app.commit_search();
            } else if !app.controls.tags.is_empty() {
                app.chip_cursor = 0;
                app.toggle_chip();
            }
        }
        _ => {}
    }
}

fn handle_games_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => {
            app.game_next();
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => {
            app.game_prev();
        }
        KeyCode::Enter => {
            app.open_selected();
        }
        _ => {}
    }
}

fn handle_reviews_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.reviews_scroll = app.reviews_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.reviews_scroll = app.reviews_scroll.saturating_sub(1);
        }
        KeyCode::PageDown => {
            app.reviews_scroll = app.reviews_scroll.saturating_add(10);
        }
        KeyCode::PageUp => {
            app.reviews_scroll = app.reviews_scroll.saturating_sub(10);
        }
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_overlays();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::Char('y') => match app.overlay_link() {
            Some(link) => {
                if copy_to_clipboard(&link) {
                    app.status_msg = format!("Copied: {link}");
                } else {
                    app.status_msg = format!("Link: {link} (clipboard not available)");
                }
            }
            None => {
                app.status_msg = "No link on this entry".to_string();
            }
        },
        KeyCode::Char('o') => {
            if let Some(link) = app.overlay_link() {
                let _ = std::process::Command::new("xdg-open").arg(&link).spawn();
                app.status_msg = format!("Opening: {link}");
            } else {
                app.status_msg = "No link on this entry".to_string();
            }
        }
        _ => {}
    }
}

/// Try to copy text to the clipboard using xclip, then wl-copy.
fn copy_to_clipboard(text: &str) -> bool {
    if let Ok(mut child) = std::process::Command::new("xclip")
        .args(["-selection", "clipboard"])
        .stdin(std::process::Stdio::piped())
        .spawn()
    {
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(text.as_bytes());
        }
        let _ = child.wait();
        return true;
    }
    if let Ok(mut child) = std::process::Command::new("wl-copy")
        .stdin(std::process::Stdio::piped())
        .spawn()
    {
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(text.as_bytes());
        }
        let _ = child.wait();
        return true;
    }
    false
}
