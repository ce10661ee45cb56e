/// Format seconds as `M:SS`; minutes are not capped.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// How loud the player bar's volume icon should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

impl VolumeLevel {
    pub fn of(volume: u8) -> Self {
        match volume {
            0 => Self::Muted,
            1..=49 => Self::Low,
            _ => Self::High,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Muted => "🔇",
            Self::Low => "🔉",
            Self::High => "🔊",
        }
    }
}

/// Played share of the track in percent; zero for an empty track.
pub fn progress_percent(position: u32, duration: u32) -> f64 {
    if duration == 0 {
        0.0
    } else {
        f64::from(position) / f64::from(duration) * 100.0
    }
}

/// Two-digit, one-based row number used by the queue panel.
pub fn queue_number(index: usize) -> String {
    format!("{:02}", index + 1)
}
