// ABOUTME: Selected channels rendered as removable cards

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::state::DashboardFocus;
use crate::app::AppState;

#[derive(Default)]
pub struct SelectionListComponent {
    list_state: ListState,
}

impl SelectionListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let dashboard = &state.dashboard;
        let focused = dashboard.focus == DashboardFocus::Selection;
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        let items: Vec<ListItem> = if dashboard.selection.is_empty() {
            vec![ListItem::new("No channels selected yet").style(Style::default().fg(Color::Gray))]
        } else {
            dashboard
                .selection
                .iter()
                .map(|channel| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            channel.name.as_str(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            format!("  {}", channel.thumbnail),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Selected Channels ({})", dashboard.selection.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let selected = if focused && !dashboard.selection.is_empty() {
            dashboard.selected_card
        } else {
            None
        };
        self.list_state.select(selected);

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
