use crate::catalog::Track;

/// Everything the player bar and queue panel render.
///
/// Only `Controller` mutates this; presentation code receives `&PlaybackState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    pub queue: Vec<Track>,
    /// The loaded track. `None` means the player is stopped and hidden.
    pub current_track: Option<Track>,
    /// Position of `current_track` inside `queue`.
    pub current_index: usize,
    pub is_playing: bool,
    pub position_seconds: u32,
    pub duration_seconds: u32,
    /// 0..=100
    pub volume: u8,
    pub is_queue_open: bool,
    pub is_player_visible: bool,
}

impl PlaybackState {
    /// Fresh session state: empty queue, nothing loaded.
    pub fn new(volume: u8) -> Self {
        Self {
            queue: Vec::new(),
            current_track: None,
            current_index: 0,
            is_playing: false,
            position_seconds: 0,
            duration_seconds: 0,
            volume: volume.min(100),
            is_queue_open: false,
            is_player_visible: false,
        }
    }

    pub fn current_id(&self) -> Option<u32> {
        self.current_track.as_ref().map(|t| t.id)
    }

    /// Whether queue entry `index` is the loaded track.
    pub fn is_current(&self, index: usize) -> bool {
        match (&self.current_track, self.queue.get(index)) {
            (Some(cur), Some(t)) => cur.id == t.id,
            _ => false,
        }
    }

    pub fn is_queued(&self, id: u32) -> bool {
        self.queue.iter().any(|t| t.id == id)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(75)
    }
}
