// ABOUTME: Sign-in screen prompting the user to finish authentication and verify the session

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::AppState;

pub struct SignInComponent {
    sign_in_url: String,
}

impl SignInComponent {
    pub fn new(sign_in_url: impl Into<String>) -> Self {
        Self {
            sign_in_url: sign_in_url.into(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut text = vec![
            Line::from(vec![Span::styled(
                "Sign in required",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Sign in with your account in a browser:"),
            Line::from(Span::styled(
                self.sign_in_url.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from("Or start tubeshare with --session-cookie to reuse an existing session."),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Enter",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - I have signed in, continue"),
            ]),
            Line::from(vec![
                Span::styled(
                    "  Esc",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Back"),
            ]),
        ];

        if let Some(ref message) = state.sign_in_message {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Sign In")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }
}

impl Default for SignInComponent {
    fn default() -> Self {
        Self::new(format!("{}/signin", crate::config::DEFAULT_BASE_URL))
    }
}
