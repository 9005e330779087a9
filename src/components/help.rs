// ABOUTME: Help overlay component displaying keyboard shortcuts for each screen

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Landing & Sign-in:").style(section),
            ListItem::new("  Enter      Get started / continue after signing in"),
            ListItem::new("  Esc        Back to landing"),
            ListItem::new(""),
            ListItem::new("Dashboard:").style(section),
            ListItem::new("  Tab        Cycle search / selection / list name"),
            ListItem::new("  ↑/↓        Move through search results"),
            ListItem::new("  Enter      Add result to list / create list"),
            ListItem::new("  Esc        Close search results"),
            ListItem::new("  j/k        Move through selected channels"),
            ListItem::new("  d/x/Del    Remove selected channel"),
            ListItem::new("  Ctrl+L     Log out"),
            ListItem::new("  ? / q      Help / quit (selection focus only)"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  F1         Toggle this help"),
            ListItem::new("  ? / q      Help / quit (not while typing)"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press ? or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
