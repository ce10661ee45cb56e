/// Generation-tagged run flag for the simulated playback clock.
///
/// Every start, stop or restart bumps `generation`. A scheduled tick carries
/// the generation it was armed with, so anything armed before the latest
/// change can be recognised as stale and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    generation: u64,
    running: bool,
}

impl Clock {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Follow the playing flag. `restart` re-arms a running clock so the
    /// next tick is a full interval away (used on track changes).
    pub fn sync(&mut self, playing: bool, restart: bool) {
        if playing != self.running || (playing && restart) {
            self.generation = self.generation.wrapping_add(1);
            self.running = playing;
        }
    }

    /// Whether a tick armed with `generation` may still act.
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }
}
