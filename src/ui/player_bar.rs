//! Player bar: now-playing info, transport state, waveform progress, volume.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::format::{VolumeLevel, format_time, progress_percent};
use super::waveform::{Waveform, glyph};
use crate::app::App;
use crate::player::PlaybackState;

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.player.state();
    let Some(track) = state.current_track.as_ref() else {
        return;
    };
    let liked = app.player.is_liked(track.id);
    // Play counts belong to the catalog listing, not the queued snapshot.
    let plays = app.catalog.get(track.id).and_then(|t| t.plays.as_deref());
    let width = area.width.saturating_sub(4) as usize;

    let lines = vec![
        now_playing_line(state, liked, plays),
        progress_line(state, &app.waveform, width),
        volume_line(state),
    ];

    let bar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" now playing ")
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(bar, area);
}

fn now_playing_line(state: &PlaybackState, liked: bool, plays: Option<&str>) -> Line<'static> {
    let Some(track) = state.current_track.as_ref() else {
        return Line::default();
    };

    let heart = if liked {
        Span::styled("♥ ", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡ ", Style::default().fg(Color::DarkGray))
    };
    let transport = if state.is_playing { "▶ Playing" } else { "⏸ Paused" };

    let mut spans = vec![
        heart,
        Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" — "),
        Span::styled(track.artist.clone(), Style::default().fg(Color::Gray)),
    ];
    if let Some(plays) = plays {
        spans.push(Span::styled(
            format!(" · {} plays", plays),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::raw(transport));
    spans.push(Span::raw(format!("   queue: {}", state.queue.len())));
    Line::from(spans)
}

fn progress_line(state: &PlaybackState, waveform: &Waveform, width: usize) -> Line<'static> {
    let elapsed = format_time(state.position_seconds);
    let total = format_time(state.duration_seconds);
    let progress = progress_percent(state.position_seconds, state.duration_seconds);

    let mut spans = vec![Span::raw(format!("{} ", elapsed))];
    if waveform.is_empty() {
        spans.push(Span::raw(format!("{:.0}%", progress)));
    }
    // Fit as many bars as the row has room for next to the two timestamps.
    let room = width.saturating_sub(elapsed.len() + total.len() + 2);
    for (i, &h) in waveform.heights().iter().take(room).enumerate() {
        let style = if waveform.is_active(i, progress) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(glyph(h).to_string(), style));
    }
    spans.push(Span::raw(format!(" {}", total)));
    Line::from(spans)
}

fn volume_line(state: &PlaybackState) -> Line<'static> {
    let level = VolumeLevel::of(state.volume);
    let filled = usize::from(state.volume) / 10;
    let meter = format!("{}{}", "▮".repeat(filled), "▯".repeat(10 - filled));
    Line::from(vec![
        Span::raw(format!("{} ", level.glyph())),
        Span::raw(meter),
        Span::raw(format!(" {}%", state.volume)),
    ])
}
