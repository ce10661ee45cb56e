//! Queue panel: the ordered, reorderable play queue.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::format::queue_number;
use crate::app::{App, Focus};

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.player.state();
    let focused = app.focus == Focus::Queue;

    let title = match app.grabbed {
        Some(i) => format!(" queue: {} tracks (moving {}) ", state.queue.len(), queue_number(i)),
        None => format!(" queue: {} tracks ", state.queue.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if state.queue.is_empty() {
        let empty = Paragraph::new("Queue is empty\n\nAdd tracks to start playback")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .queue
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let current = state.is_current(i);
            let marker = if current {
                Span::styled("♪♪", Style::default().fg(Color::White))
            } else {
                Span::styled(queue_number(i), Style::default().fg(Color::DarkGray))
            };
            let title_style = if current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut line = Line::from(vec![
                marker,
                Span::raw(" "),
                Span::styled(track.title.clone(), title_style),
                Span::raw(" — "),
                Span::styled(track.artist.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(track.duration_label.clone(), Style::default().fg(Color::DarkGray)),
            ]);
            if app.grabbed == Some(i) {
                line = line.style(Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC));
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.queue_selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
