// ABOUTME: Event handling system for keyboard input and app actions

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::route::Route;
use crate::app::state::{AsyncAction, DashboardFocus};
use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Landing / sign-in
    GetStarted,
    VerifySession,
    BackToLanding,
    // Dashboard
    FocusNext,
    FocusPrevious,
    Logout,
    SearchInputChar(char),
    SearchBackspace,
    SearchNextResult,
    SearchPreviousResult,
    SearchSelectResult,
    SearchCloseDropdown,
    SelectionNext,
    SelectionPrevious,
    SelectionRemove,
    ListNameInputChar(char),
    ListNameBackspace,
    CreateList,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => Some(AppEvent::Quit),
                KeyCode::Char('l') if state.current_route() == Route::Dashboard => {
                    Some(AppEvent::Logout)
                }
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if key_event.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        match state.current_route() {
            Route::Landing => Self::handle_landing_keys(key_event),
            Route::SignIn => Self::handle_sign_in_keys(key_event),
            Route::Dashboard => Self::handle_dashboard_keys(key_event, state),
        }
    }

    fn handle_landing_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(AppEvent::GetStarted),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_sign_in_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(AppEvent::VerifySession),
            KeyCode::Esc => Some(AppEvent::BackToLanding),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_dashboard_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab => return Some(AppEvent::FocusNext),
            KeyCode::BackTab => return Some(AppEvent::FocusPrevious),
            _ => {}
        }

        match state.dashboard.focus {
            DashboardFocus::Search => match key_event.code {
                KeyCode::Down => Some(AppEvent::SearchNextResult),
                KeyCode::Up => Some(AppEvent::SearchPreviousResult),
                KeyCode::Enter => Some(AppEvent::SearchSelectResult),
                KeyCode::Esc => Some(AppEvent::SearchCloseDropdown),
                KeyCode::Backspace => Some(AppEvent::SearchBackspace),
                KeyCode::Char(ch) => Some(AppEvent::SearchInputChar(ch)),
                _ => None,
            },
            DashboardFocus::Selection => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::SelectionNext),
                KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::SelectionPrevious),
                KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                    Some(AppEvent::SelectionRemove)
                }
                KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                KeyCode::Char('q') => Some(AppEvent::Quit),
                _ => None,
            },
            DashboardFocus::ListName => match key_event.code {
                KeyCode::Enter => Some(AppEvent::CreateList),
                KeyCode::Backspace => Some(AppEvent::ListNameBackspace),
                KeyCode::Char(ch) => Some(AppEvent::ListNameInputChar(ch)),
                _ => None,
            },
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::GetStarted => state.get_started(),
            AppEvent::VerifySession => {
                // Mark for async processing
                state.pending_async_action = Some(AsyncAction::VerifySession);
            }
            AppEvent::BackToLanding => state.navigate(Route::Landing),
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::Logout => {
                state.pending_async_action = Some(AsyncAction::Logout);
            }
            AppEvent::SearchInputChar(ch) => state.search_input_char(ch, Instant::now()),
            AppEvent::SearchBackspace => state.search_backspace(Instant::now()),
            AppEvent::SearchNextResult => state.dashboard.search.highlight_next(),
            AppEvent::SearchPreviousResult => state.dashboard.search.highlight_previous(),
            AppEvent::SearchSelectResult => state.select_highlighted_result(),
            AppEvent::SearchCloseDropdown => state.dashboard.search.close_dropdown(),
            AppEvent::SelectionNext => state.next_card(),
            AppEvent::SelectionPrevious => state.previous_card(),
            AppEvent::SelectionRemove => state.remove_selected_card(),
            AppEvent::ListNameInputChar(ch) => state.list_name_char(ch),
            AppEvent::ListNameBackspace => state.list_name_backspace(),
            AppEvent::CreateList => {
                // Disabled until there is a name and at least one channel
                if state.dashboard.can_create_list() {
                    state.create_list();
                }
            }
        }
    }
}
