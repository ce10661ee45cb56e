//! UI rendering helpers for the terminal user interface.
//!
//! `draw` lays out the header, the catalog list, the optional queue panel,
//! the player bar and the controls footer. The surfaces only read
//! `PlaybackState`; every change goes back through `App::apply`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Focus};
use crate::config::{ControlsSettings, UiSettings};

mod catalog_list;
mod format;
mod player_bar;
mod queue_panel;
mod waveform;

pub use waveform::Waveform;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("gg/G".to_string(), "top/bottom".to_string());
    map.insert("tab".to_string(), "switch list".to_string());
    map.insert("enter".to_string(), "play".to_string());
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next".to_string());
    // H/L and +/- are filled dynamically from config.
    map.insert("0-9".to_string(), "seek".to_string());
    map.insert("f".to_string(), "like".to_string());
    map.insert("Q".to_string(), "queue".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

static QUEUE_CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("m".to_string(), "grab/drop".to_string());
    map.insert("x".to_string(), "remove".to_string());
    map.insert("C".to_string(), "clear".to_string());
    map.insert("esc".to_string(), "cancel/close".to_string());
    map
});

/// Render the controls help text for the focused list.
fn controls_text(focus: Focus, controls: &ControlsSettings) -> String {
    let order = [
        "j/k", "gg/G", "tab", "enter", "space/p", "h/l", "H/L", "0-9", "+/-", "f", "Q", "q",
    ];
    let mut parts: Vec<String> = order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] scrub -/+{}s", controls.scrub_seconds)),
            "+/-" => Some(format!("[+/-] volume ±{}", controls.volume_step)),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect();

    if focus == Focus::Queue {
        for k in ["m", "x", "C", "esc"] {
            if let Some(v) = QUEUE_CONTROLS_MAP.get(k) {
                parts.push(format!("[{}] {}", k, v));
            }
        }
    }
    parts.join(" | ")
}

/// Render the entire UI into `frame` from `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let state = app.player.state();
    let player_height = if state.is_player_visible { 5 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(player_height),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tempodeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if state.is_queue_open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        catalog_list::render(frame, body[0], app);
        queue_panel::render(frame, body[1], app);
    } else {
        catalog_list::render(frame, chunks[1], app);
    }

    if state.is_player_visible {
        player_bar::render(frame, chunks[2], app);
    }

    let footer = Paragraph::new(controls_text(app.focus, controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
