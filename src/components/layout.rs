// ABOUTME: Main layout component handling screen selection, header, and bottom menu bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::{AppState, Route};
use super::{DashboardComponent, HelpComponent, LandingComponent, SignInComponent};

pub struct LayoutComponent {
    landing: LandingComponent,
    sign_in: SignInComponent,
    dashboard: DashboardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            landing: LandingComponent::new(),
            sign_in: SignInComponent::default(),
            dashboard: DashboardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Point the sign-in screen at the configured service.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            sign_in: SignInComponent::new(format!("{}/signin", base_url.trim_end_matches('/'))),
            ..Self::new()
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Header
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(area);

        self.render_header(frame, main_chunks[0], state);

        match state.current_route() {
            Route::Landing => self.landing.render(frame, main_chunks[1], state),
            Route::SignIn => self.sign_in.render(frame, main_chunks[1], state),
            Route::Dashboard => self.dashboard.render(frame, main_chunks[1], state),
        }

        self.render_menu_bar(frame, main_chunks[2], state.current_route());

        // Render help overlay if visible
        if state.help_visible {
            self.help.render(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let session = if state.auth.is_authenticated() {
            "signed in"
        } else {
            "signed out"
        };
        let header = Paragraph::new(format!(
            " TubeShare  {}  [{}]",
            state.current_route().path(),
            session
        ))
        .style(Style::default().fg(Color::White).bg(Color::Red));
        frame.render_widget(header, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, route: Route) {
        let menu_text = match route {
            Route::Landing => "[Enter]get started [?]help [q]uit",
            Route::SignIn => "[Enter]continue [Esc]back [?]help [q]uit",
            Route::Dashboard => {
                "[Tab]focus [Enter]add/create [d]remove [Ctrl+L]logout [F1]help [Ctrl+C]quit"
            }
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
