//! Catalog list: every track the player can load.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.player.state();
    let focused = app.focus == Focus::Catalog;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" top tracks ")
        .border_style(if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if app.catalog.is_empty() {
        frame.render_widget(Paragraph::new("No tracks in catalog").block(block), area);
        return;
    }

    let current = state.current_id();
    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .map(|track| {
            let mark = if current == Some(track.id) {
                "▶ "
            } else if state.is_queued(track.id) {
                "+ "
            } else {
                "  "
            };
            let mut spans = vec![
                Span::raw(mark),
                Span::styled(track.display(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(track.duration_label.clone(), Style::default().fg(Color::DarkGray)),
            ];
            if let Some(plays) = &track.plays {
                spans.push(Span::styled(
                    format!("  {} plays", plays),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.catalog_selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
