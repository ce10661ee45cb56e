use super::model::{Catalog, Track};

const COVER: &str = "/img/32882425-1015-4d5c-8e17-2baae435d8e1.jpg";

const TOP_TRACKS: &[(u32, &str, &str, &str, &str)] = &[
    (1, "Bohemian Rhapsody", "Queen", "2.1B", "5:55"),
    (2, "Hotel California", "Eagles", "1.8B", "6:30"),
    (3, "Stairway to Heaven", "Led Zeppelin", "1.5B", "8:02"),
    (4, "Imagine", "John Lennon", "1.2B", "3:03"),
    (5, "Smells Like Teen Spirit", "Nirvana", "900M", "5:01"),
];

impl Catalog {
    /// The mock "top tracks" list shipped with the binary.
    pub fn builtin() -> Self {
        let tracks = TOP_TRACKS
            .iter()
            .map(|&(id, title, artist, plays, duration)| Track {
                id,
                title: title.to_string(),
                artist: artist.to_string(),
                duration_label: duration.to_string(),
                cover_ref: COVER.to_string(),
                plays: Some(plays.to_string()),
            })
            .collect();
        Catalog::from_tracks(tracks)
    }
}
