use rand::Rng;

const MIN_HEIGHT: f32 = 10.0;
const MAX_HEIGHT: f32 = 110.0;
const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Decorative bar heights drawn under the player controls.
///
/// Purely cosmetic: regenerated per track, never read by the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waveform {
    heights: Vec<f32>,
}

impl Waveform {
    /// `bars` random heights in `[10, 110)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bars: usize) -> Self {
        let heights = (0..bars)
            .map(|_| rng.random_range(MIN_HEIGHT..MAX_HEIGHT))
            .collect();
        Self { heights }
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Bar `i` is lit once playback has passed its share of the strip.
    pub fn is_active(&self, index: usize, progress_percent: f64) -> bool {
        if self.heights.is_empty() {
            return false;
        }
        (index as f64 / self.heights.len() as f64) * 100.0 <= progress_percent
    }
}

/// Block glyph for a bar of height `h`.
pub fn glyph(h: f32) -> char {
    let t = ((h - MIN_HEIGHT) / (MAX_HEIGHT - MIN_HEIGHT)).clamp(0.0, 1.0);
    let level = (t * (LEVELS.len() - 1) as f32).round() as usize;
    LEVELS[level.min(LEVELS.len() - 1)]
}
