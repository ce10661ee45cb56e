use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Focus};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::player::{Controller, Scheduler, Tick};

mod event_loop;
mod keymap;
mod logging;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();
    if let Err(e) = logging::init_logging(&settings.logging) {
        eprintln!("tempodeck: logging disabled: {e}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tempodeck starting");

    let catalog = load_catalog(&settings);
    let mut player = Controller::new(
        settings.player.initial_volume,
        settings.player.fallback_duration_secs,
    );
    player.set_queue_open(settings.ui.open_queue_on_start);
    let mut app = App::new(catalog, player, settings.player.waveform_bars);
    if settings.ui.open_queue_on_start {
        app.focus = Focus::Queue;
    }

    let (tick_tx, tick_rx) = mpsc::channel::<Tick>();
    let mut scheduler = Scheduler::new(Duration::from_millis(settings.player.tick_ms), tick_tx);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &tick_rx,
            &mut scheduler,
            &mut state,
        )
    })();

    scheduler.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tempodeck exiting");
    run_result
}

/// The configured catalog file, or the built-in list when unset or unreadable.
fn load_catalog(settings: &Settings) -> Catalog {
    let Some(path) = settings.catalog.path.as_deref() else {
        return Catalog::builtin();
    };
    match Catalog::load(path) {
        Ok(c) => {
            tracing::info!(path = %path.display(), tracks = c.len(), "catalog loaded");
            c
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog unavailable, using built-in tracks");
            Catalog::builtin()
        }
    }
}
