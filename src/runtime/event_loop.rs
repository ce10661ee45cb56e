use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::{Scheduler, Tick};
use crate::ui;

use super::keymap::map_key;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: applies clock ticks, draws the UI and handles
/// input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    ticks: &Receiver<Tick>,
    scheduler: &mut Scheduler,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    scheduler.sync(app.player.clock());

    loop {
        drain_ticks(app, ticks, scheduler);

        app.sync_waveform(&mut rng);
        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(cmd) = map_key(key, app.focus, &settings.controls, state) {
                    if app.apply(cmd) {
                        break;
                    }
                    // Re-arm right away so a pause or skip cancels the old ticker
                    // before another tick can be queued.
                    scheduler.sync(app.player.clock());
                }
            }
        }
    }

    Ok(())
}

/// Apply every queued tick, following the clock after each one so an
/// auto-advance re-arms the ticker immediately.
pub(super) fn drain_ticks(app: &mut App, ticks: &Receiver<Tick>, scheduler: &mut Scheduler) {
    while let Ok(tick) = ticks.try_recv() {
        app.player.on_tick(tick.generation);
        scheduler.sync(app.player.clock());
    }
}
