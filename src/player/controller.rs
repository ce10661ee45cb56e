use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::Track;

use super::clock::Clock;
use super::duration::parse_duration_label;
use super::error::QueueError;
use super::state::PlaybackState;

/// The playback/queue state machine.
///
/// All state transitions go through these methods; the UI only ever sees
/// `&PlaybackState`. The clock's generation is bumped whenever playback
/// starts, stops or switches track so stale ticks can be rejected.
pub struct Controller {
    state: PlaybackState,
    clock: Clock,
    fallback_duration: u32,
    liked: HashSet<u32>,
}

impl Controller {
    /// `fallback_duration` is used for tracks whose duration label does not parse.
    pub fn new(volume: u8, fallback_duration: u32) -> Self {
        Self {
            state: PlaybackState::new(volume),
            clock: Clock::default(),
            fallback_duration,
            liked: HashSet::new(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Load `track`, queueing it at the end unless its id is already queued.
    pub fn play_track(&mut self, track: &Track) {
        let index = match self.position_of(track.id) {
            Some(i) => i,
            None => {
                self.state.queue.push(track.clone());
                self.state.queue.len() - 1
            }
        };
        debug!(id = track.id, index, "play track");
        self.load(index);
    }

    /// Make an already queued track current. Returns `false` if it is not queued.
    pub fn select_from_queue(&mut self, track: &Track) -> bool {
        match self.position_of(track.id) {
            Some(index) => {
                debug!(id = track.id, index, "select from queue");
                self.load(index);
                true
            }
            None => {
                debug!(id = track.id, "select ignored: track not queued");
                false
            }
        }
    }

    /// Deliver a scheduled tick. Ticks armed for an older clock generation,
    /// or arriving while paused, are dropped. Returns whether the tick applied.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if !self.clock.accepts(generation) {
            debug!(
                generation,
                current = self.clock.generation(),
                "stale tick dropped"
            );
            return false;
        }
        self.advance_clock();
        true
    }

    /// One second of simulated playback; auto-advances at the end of a track.
    pub fn advance_clock(&mut self) {
        if !self.state.is_playing || self.state.current_track.is_none() {
            return;
        }

        let next = self.state.position_seconds.saturating_add(1);
        if next >= self.state.duration_seconds {
            debug!(index = self.state.current_index, "track finished, auto-advance");
            self.state.position_seconds = 0;
            self.state.is_playing = false;
            self.next_track();
        } else {
            self.state.position_seconds = next;
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.current_track.is_none() {
            return;
        }
        self.state.is_playing = !self.state.is_playing;
        debug!(playing = self.state.is_playing, "toggle play/pause");
        self.clock.sync(self.state.is_playing, false);
    }

    /// Jump to `to` seconds, clamped to the track length.
    pub fn seek(&mut self, to: i64) {
        let clamped = to.clamp(0, i64::from(self.state.duration_seconds));
        self.state.position_seconds = clamped as u32;
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta: i64) {
        self.seek(i64::from(self.state.position_seconds) + delta);
    }

    pub fn set_volume(&mut self, v: i32) {
        self.state.volume = v.clamp(0, 100) as u8;
    }

    pub fn next_track(&mut self) {
        let len = self.state.queue.len();
        if len == 0 {
            return;
        }
        let index = (self.state.current_index + 1) % len;
        self.load(index);
    }

    pub fn prev_track(&mut self) {
        let len = self.state.queue.len();
        if len == 0 {
            return;
        }
        let index = if self.state.current_index == 0 {
            len - 1
        } else {
            self.state.current_index - 1
        };
        self.load(index);
    }

    /// Move the entry at `from` so it lands before the entry that was at `to`.
    ///
    /// Removal happens first, so moving forward inserts at `to - 1`. The
    /// current-track marker follows the track, not the slot.
    pub fn reorder_queue(&mut self, from: usize, to: usize) -> Result<(), QueueError> {
        let len = self.state.queue.len();
        for index in [from, to] {
            if index >= len {
                warn!(index, len, "reorder rejected");
                return Err(QueueError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let track = self.state.queue.remove(from);
        let insert_at = if from < to { to - 1 } else { to };
        self.state.queue.insert(insert_at, track);

        if let Some(id) = self.state.current_id() {
            if let Some(i) = self.position_of(id) {
                self.state.current_index = i;
            }
        }
        debug!(from, to, insert_at, current = self.state.current_index, "queue reordered");
        Ok(())
    }

    /// Drop the entry at `index`.
    ///
    /// Removing the loaded track loads whatever slid into its slot (or the
    /// first entry if it was last); an emptied queue unloads the player.
    pub fn remove_from_queue(&mut self, index: usize) -> Result<(), QueueError> {
        let len = self.state.queue.len();
        if index >= len {
            warn!(index, len, "remove rejected");
            return Err(QueueError::IndexOutOfRange { index, len });
        }

        let removing_current =
            self.state.current_track.is_some() && index == self.state.current_index;
        let removed = self.state.queue.remove(index);
        debug!(id = removed.id, index, removing_current, "removed from queue");

        if removing_current {
            if self.state.queue.is_empty() {
                self.unload();
            } else {
                let next = if index < self.state.queue.len() { index } else { 0 };
                self.load(next);
            }
        } else if index < self.state.current_index {
            self.state.current_index -= 1;
        }
        Ok(())
    }

    pub fn clear_queue(&mut self) {
        debug!(len = self.state.queue.len(), "queue cleared");
        self.state.queue.clear();
        self.unload();
    }

    pub fn toggle_queue_open(&mut self) {
        self.state.is_queue_open = !self.state.is_queue_open;
    }

    pub fn set_queue_open(&mut self, open: bool) {
        self.state.is_queue_open = open;
    }

    /// Flip the liked mark on the loaded track. Returns the new mark.
    pub fn toggle_like(&mut self) -> Option<bool> {
        let id = self.state.current_id()?;
        let liked = if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        };
        Some(liked)
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    fn position_of(&self, id: u32) -> Option<usize> {
        self.state.queue.iter().position(|t| t.id == id)
    }

    fn load(&mut self, index: usize) {
        let Some(track) = self.state.queue.get(index).cloned() else {
            return;
        };
        self.state.duration_seconds =
            parse_duration_label(&track.duration_label).unwrap_or(self.fallback_duration);
        self.state.current_track = Some(track);
        self.state.current_index = index;
        self.state.position_seconds = 0;
        self.state.is_playing = true;
        self.state.is_player_visible = true;
        self.clock.sync(true, true);
    }

    fn unload(&mut self) {
        self.state.current_track = None;
        self.state.current_index = 0;
        self.state.position_seconds = 0;
        self.state.duration_seconds = 0;
        self.state.is_playing = false;
        self.state.is_player_visible = false;
        self.clock.sync(false, false);
    }
}
