/// A user gesture, already decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    CursorDown,
    CursorUp,
    CursorTop,
    CursorBottom,
    /// Move focus between the catalog and the (open) queue panel.
    SwitchFocus,
    /// Play the catalog selection, or make the queue selection current.
    Activate,
    TogglePlayPause,
    Next,
    Prev,
    /// Scrub by a signed number of seconds.
    SeekBy(i64),
    /// Jump to the given tenth of the track (0..=9).
    SeekTenth(u8),
    VolumeBy(i32),
    ToggleQueue,
    ToggleLike,
    /// Pick up the selected queue entry, or drop the held one at the cursor.
    GrabOrDrop,
    RemoveSelected,
    ClearQueue,
    /// Abort a grab, otherwise close the queue panel.
    Cancel,
}
