// ABOUTME: Landing screen introducing TubeShare with a call to action

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::AppState;

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let call_to_action = if state.auth.is_authenticated() {
            " - Open your dashboard"
        } else {
            " - Sign in to get started"
        };

        let text = vec![
            Line::from(vec![Span::styled(
                "TubeShare",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Search for channels, pick your favourites, and bundle them into a named list."),
            Line::from("Share the list so friends can discover the channels you love."),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Enter",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(call_to_action),
            ]),
            Line::from(vec![
                Span::styled(
                    "  q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Quit application"),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Welcome")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}
