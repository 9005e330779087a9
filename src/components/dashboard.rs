// ABOUTME: Dashboard screen with channel search dropdown, selected channels, and list naming

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::SelectionListComponent;
use crate::app::search::SearchState;
use crate::app::state::{DashboardFocus, DashboardState};
use crate::app::AppState;

pub struct DashboardComponent {
    results_state: ListState,
    selection_list: SelectionListComponent,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            results_state: ListState::default(),
            selection_list: SelectionListComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let dashboard = &state.dashboard;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Min(0),    // Results + selection
                Constraint::Length(3), // List name
                Constraint::Length(1), // Status line
            ])
            .split(area);

        self.render_search_input(frame, chunks[0], dashboard);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50), // Search results
                Constraint::Percentage(50), // Selected channels
            ])
            .split(chunks[1]);

        self.render_results(frame, content_chunks[0], &dashboard.search);
        self.selection_list.render(frame, content_chunks[1], state);

        self.render_list_name(frame, chunks[2], dashboard);
        self.render_status(frame, chunks[3], dashboard);
    }

    fn render_search_input(&self, frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
        let focused = dashboard.focus == DashboardFocus::Search;
        let border_color = if focused { Color::Green } else { Color::Gray };
        let title = if dashboard.search.is_loading {
            "Search Channels (searching...)"
        } else {
            "Search Channels"
        };

        let input = Paragraph::new(dashboard.search.query.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(input, area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect, search: &SearchState) {
        let block = |title: String| {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title)
        };

        if let Some(ref error) = search.error {
            let message = Paragraph::new(error.as_str())
                .block(block("Results".to_string()))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(message, area);
            return;
        }

        if !search.is_open {
            let hint = if search.is_loading {
                "Searching..."
            } else {
                "Type to search for channels"
            };
            let message = Paragraph::new(hint)
                .block(block("Results".to_string()))
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = if search.results.is_empty() {
            vec![ListItem::new("No channels found").style(Style::default().fg(Color::Gray))]
        } else {
            search
                .results
                .iter()
                .map(|channel| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            channel.name.as_str(),
                            Style::default().fg(Color::White),
                        )),
                        Line::from(Span::styled(
                            format!("  {}", channel.navigation_endpoint),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ])
                })
                .collect()
        };

        let list = List::new(items)
            .block(block(format!("Results ({})", search.results.len())))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        self.results_state.select(search.highlighted);
        frame.render_stateful_widget(list, area, &mut self.results_state);
    }

    fn render_list_name(&self, frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
        let focused = dashboard.focus == DashboardFocus::ListName;
        let border_color = if focused { Color::Green } else { Color::Gray };
        let title = if dashboard.can_create_list() {
            "List Name (Enter: create list)"
        } else {
            "List Name (needs a name and at least one channel)"
        };

        let input = Paragraph::new(dashboard.list_name.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(input, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
        let text = dashboard.status_message.as_deref().unwrap_or("");
        let status = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
        frame.render_widget(status, area);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
