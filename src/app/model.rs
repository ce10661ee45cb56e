//! Application model types: `App` and `Focus`.
//!
//! The `App` struct holds the catalog, the playback controller and the
//! cursor state of the two lists. The controller stays the single owner of
//! playback state; `App` only translates commands into controller calls.

use rand::Rng;
use tracing::debug;

use super::command::Command;
use crate::catalog::Catalog;
use crate::player::Controller;
use crate::ui::Waveform;

/// Which list receives cursor movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Catalog,
    Queue,
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub player: Controller,
    pub focus: Focus,
    pub catalog_selected: usize,
    pub queue_selected: usize,
    /// Queue position picked up for a move, if any.
    pub grabbed: Option<usize>,
    pub waveform: Waveform,
    waveform_track: Option<u32>,
    waveform_bars: usize,
}

impl App {
    /// Create a new `App` over `catalog` driving `player`.
    pub fn new(catalog: Catalog, player: Controller, waveform_bars: usize) -> Self {
        Self {
            catalog,
            player,
            focus: Focus::Catalog,
            catalog_selected: 0,
            queue_selected: 0,
            grabbed: None,
            waveform: Waveform::default(),
            waveform_track: None,
            waveform_bars,
        }
    }

    /// Apply a command. Returns `true` when the app should exit.
    pub fn apply(&mut self, cmd: Command) -> bool {
        debug!(?cmd, focus = ?self.focus, "command");
        match cmd {
            Command::Quit => return true,
            Command::CursorDown => self.move_cursor(1),
            Command::CursorUp => self.move_cursor(-1),
            Command::CursorTop => *self.cursor_mut() = 0,
            Command::CursorBottom => {
                let len = self.focused_len();
                *self.cursor_mut() = len.saturating_sub(1);
            }
            Command::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Catalog if self.player.state().is_queue_open => Focus::Queue,
                    _ => Focus::Catalog,
                };
                self.grabbed = None;
            }
            Command::Activate => self.activate(),
            Command::TogglePlayPause => self.player.toggle_play_pause(),
            Command::Next => self.player.next_track(),
            Command::Prev => self.player.prev_track(),
            Command::SeekBy(delta) => self.player.seek_by(delta),
            Command::SeekTenth(tenth) => {
                let duration = i64::from(self.player.state().duration_seconds);
                self.player.seek(duration * i64::from(tenth.min(9)) / 10);
            }
            Command::VolumeBy(delta) => {
                let v = i32::from(self.player.state().volume) + delta;
                self.player.set_volume(v);
            }
            Command::ToggleQueue => {
                self.player.toggle_queue_open();
                self.follow_queue_panel();
            }
            Command::ToggleLike => {
                self.player.toggle_like();
            }
            Command::GrabOrDrop => self.grab_or_drop(),
            Command::RemoveSelected => {
                if self.focus == Focus::Queue {
                    self.grabbed = None;
                    if let Err(e) = self.player.remove_from_queue(self.queue_selected) {
                        debug!(error = %e, "remove ignored");
                    }
                }
            }
            Command::ClearQueue => {
                if self.focus == Focus::Queue {
                    self.grabbed = None;
                    self.player.clear_queue();
                }
            }
            Command::Cancel => {
                if self.grabbed.take().is_none() && self.player.state().is_queue_open {
                    self.player.set_queue_open(false);
                    self.follow_queue_panel();
                }
            }
        }
        self.clamp_cursors();
        false
    }

    /// Regenerate the waveform when the loaded track changed since the last call.
    pub fn sync_waveform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let current = self.player.state().current_id();
        if current != self.waveform_track {
            self.waveform_track = current;
            self.waveform = match current {
                Some(_) => Waveform::generate(rng, self.waveform_bars),
                None => Waveform::default(),
            };
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Catalog => {
                if let Some(track) = self.catalog.at(self.catalog_selected).cloned() {
                    self.player.play_track(&track);
                }
            }
            Focus::Queue => {
                if let Some(track) = self.player.state().queue.get(self.queue_selected).cloned() {
                    self.player.select_from_queue(&track);
                }
            }
        }
    }

    fn grab_or_drop(&mut self) {
        if self.focus != Focus::Queue {
            return;
        }
        match self.grabbed.take() {
            None => {
                if self.queue_selected < self.player.state().queue.len() {
                    self.grabbed = Some(self.queue_selected);
                }
            }
            Some(from) => {
                let to = self.queue_selected;
                if self.player.reorder_queue(from, to).is_ok() {
                    // Keep the cursor on the moved entry.
                    self.queue_selected = if from < to { to - 1 } else { to };
                }
            }
        }
    }

    /// Keep focus consistent with the queue panel's visibility.
    fn follow_queue_panel(&mut self) {
        if self.player.state().is_queue_open {
            self.focus = Focus::Queue;
        } else {
            self.focus = Focus::Catalog;
            self.grabbed = None;
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Catalog => self.catalog.len(),
            Focus::Queue => self.player.state().queue.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Catalog => &mut self.catalog_selected,
            Focus::Queue => &mut self.queue_selected,
        }
    }

    /// Move the focused cursor, wrapping at both ends.
    fn move_cursor(&mut self, delta: isize) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let cur = *self.cursor_mut();
        let next = if delta < 0 {
            if cur == 0 { len - 1 } else { cur - 1 }
        } else {
            (cur + 1) % len
        };
        *self.cursor_mut() = next;
    }

    fn clamp_cursors(&mut self) {
        let catalog_len = self.catalog.len();
        let queue_len = self.player.state().queue.len();
        self.catalog_selected = self.catalog_selected.min(catalog_len.saturating_sub(1));
        self.queue_selected = self.queue_selected.min(queue_len.saturating_sub(1));
        if self.grabbed.is_some_and(|g| g >= queue_len) {
            self.grabbed = None;
        }
    }
}
