use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Command, Focus};
use crate::config::ControlsSettings;

use super::event_loop::EventLoopState;

/// Translate a key press into a `Command` for the focused list.
///
/// `gg` needs two presses; the first one only arms `state.pending_gg`.
pub fn map_key(
    key: KeyEvent,
    focus: Focus,
    controls: &ControlsSettings,
    state: &mut EventLoopState,
) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        state.pending_gg = false;
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('n') => Some(Command::CursorDown),
            KeyCode::Char('p') => Some(Command::CursorUp),
            _ => None,
        };
    }

    if key.code == KeyCode::Char('g') {
        if state.pending_gg {
            state.pending_gg = false;
            return Some(Command::CursorTop);
        }
        state.pending_gg = true;
        return None;
    }
    // g pending should clear on any other key
    state.pending_gg = false;

    let scrub = i64::from(controls.scrub_seconds);
    let step = i32::from(controls.volume_step);

    let cmd = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('j') | KeyCode::Down => Command::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Command::CursorUp,
        KeyCode::Char('G') => Command::CursorBottom,
        KeyCode::Tab => Command::SwitchFocus,
        KeyCode::Enter => Command::Activate,
        KeyCode::Char('p') | KeyCode::Char(' ') => Command::TogglePlayPause,
        KeyCode::Char('l') => Command::Next,
        KeyCode::Char('h') => Command::Prev,
        KeyCode::Char('L') => Command::SeekBy(scrub),
        KeyCode::Char('H') => Command::SeekBy(-scrub),
        KeyCode::Char(c @ '0'..='9') => Command::SeekTenth(c as u8 - b'0'),
        KeyCode::Char('+') | KeyCode::Char('=') => Command::VolumeBy(step),
        KeyCode::Char('-') => Command::VolumeBy(-step),
        KeyCode::Char('Q') => Command::ToggleQueue,
        KeyCode::Char('f') => Command::ToggleLike,
        KeyCode::Esc => Command::Cancel,
        KeyCode::Char('m') if focus == Focus::Queue => Command::GrabOrDrop,
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete if focus == Focus::Queue => {
            Command::RemoveSelected
        }
        KeyCode::Char('C') if focus == Focus::Queue => Command::ClearQueue,
        _ => return None,
    };
    Some(cmd)
}
