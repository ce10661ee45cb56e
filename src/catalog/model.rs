use serde::Deserialize;

/// An immutable track record.
///
/// `duration_label` is display text (e.g. `"5:55"`); the player derives the
/// clock length from it when the track is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    #[serde(rename = "duration")]
    pub duration_label: String,
    #[serde(default, rename = "cover")]
    pub cover_ref: String,
    /// Play-count label shown in the catalog list (e.g. `"2.1B"`).
    #[serde(default)]
    pub plays: Option<String>,
}

impl Track {
    /// `Artist - Title`, falling back to the title when the artist is blank.
    pub fn display(&self) -> String {
        match self.artist.trim() {
            "" => self.title.clone(),
            a => format!("{} - {}", a, self.title),
        }
    }
}

/// The ordered list of tracks available to play.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Look up a track by id.
    pub fn get(&self, id: u32) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Track at list position `index`.
    pub fn at(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(super) fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}
