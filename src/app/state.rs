// ABOUTME: Application state management, screen switching, and async action processing

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::auth::AuthState;
use super::lists::{self, ListDraft};
use super::route::{self, Route, Router};
use super::search::{run_search, SearchOutcome, SearchRequest, SearchState};
use crate::api::{ApiError, TubeShareClient};
use crate::config::AppConfig;
use crate::models::{Channel, SelectionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    Search,
    Selection,
    ListName,
}

impl DashboardFocus {
    pub fn next(self) -> Self {
        match self {
            DashboardFocus::Search => DashboardFocus::Selection,
            DashboardFocus::Selection => DashboardFocus::ListName,
            DashboardFocus::ListName => DashboardFocus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DashboardFocus::Search => DashboardFocus::ListName,
            DashboardFocus::Selection => DashboardFocus::Search,
            DashboardFocus::ListName => DashboardFocus::Selection,
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub search: SearchState,
    pub selection: SelectionList,
    pub selected_card: Option<usize>,
    pub list_name: String,
    pub focus: DashboardFocus,
    pub last_created: Option<ListDraft>,
    pub status_message: Option<String>,
}

impl DashboardState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            search: SearchState::new(debounce),
            ..Default::default()
        }
    }

    /// Drop everything the previous session left on the dashboard.
    pub fn reset(&mut self) {
        *self = Self {
            search: self.search.renewed(),
            ..Default::default()
        };
    }

    pub fn can_create_list(&self) -> bool {
        lists::can_create(&self.list_name, &self.selection)
    }

    fn clamp_selected_card(&mut self) {
        self.selected_card = match self.selected_card {
            _ if self.selection.is_empty() => None,
            Some(idx) if idx >= self.selection.len() => Some(self.selection.len() - 1),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    /// Re-run the auth check from the sign-in screen and log in on success.
    VerifySession,
    Logout,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub router: Router,
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub should_quit: bool,
    pub help_visible: bool,
    pub sign_in_message: Option<String>,
    pub pending_async_action: Option<AsyncAction>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            dashboard: DashboardState::new(debounce),
            ..Default::default()
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
    }

    /// Run the route guard against the current screen.
    pub fn enforce_guard(&mut self) -> bool {
        route::guard(&self.auth, &mut self.router)
    }

    pub fn load_mock_data(&mut self) {
        let channels = [
            Channel::new("UC001", "Rust Weekly", "//i.ytimg.com/rust.jpg", "/@rustweekly"),
            Channel::new("UC002", "Systems Talk", "//i.ytimg.com/sys.jpg", "/@systemstalk"),
            Channel::new("UC003", "Terminal Tricks", "//i.ytimg.com/term.jpg", "/@termtricks"),
        ];

        for channel in channels.iter().take(2) {
            self.dashboard.selection.add(channel.clone());
        }
        self.dashboard.selected_card = Some(0);

        let search = &mut self.dashboard.search;
        search.query = "t".to_string();
        search.debounced_query = "t".to_string();
        search.results = channels.to_vec();
        search.is_open = true;
        search.highlighted = Some(0);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Landing screen call to action.
    pub fn get_started(&mut self) {
        if self.auth.is_authenticated() {
            self.navigate(Route::Dashboard);
        } else {
            self.sign_in_message = None;
            self.navigate(Route::SignIn);
        }
    }

    pub fn focus_next(&mut self) {
        self.dashboard.focus = self.dashboard.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.dashboard.focus = self.dashboard.focus.previous();
    }

    pub fn search_input_char(&mut self, ch: char, now: Instant) {
        self.dashboard.search.input_char(ch, now);
    }

    pub fn search_backspace(&mut self, now: Instant) {
        self.dashboard.search.backspace(now);
    }

    /// Hand the settled query, if any, to the caller for dispatch.
    pub fn poll_search(&mut self, now: Instant) -> Option<SearchRequest> {
        self.dashboard.search.poll(now)
    }

    pub fn apply_search_outcome(&mut self, outcome: SearchOutcome) -> bool {
        self.dashboard.search.apply_outcome(outcome)
    }

    /// Add the highlighted dropdown result to the selection list.
    pub fn select_highlighted_result(&mut self) {
        let Some(channel) = self.dashboard.search.choose_highlighted() else {
            return;
        };
        self.add_channel(channel);
    }

    pub fn add_channel(&mut self, channel: Channel) {
        let name = channel.name.clone();
        if self.dashboard.selection.add(channel) {
            info!("Selected channel {}", name);
            self.dashboard.status_message = None;
        } else {
            self.dashboard.status_message = Some(format!("{} is already in the list", name));
        }
        self.dashboard.clamp_selected_card();
    }

    pub fn remove_channel(&mut self, channel_id: &str) {
        if self.dashboard.selection.remove(channel_id) {
            info!("Removed channel {}", channel_id);
        }
        self.dashboard.clamp_selected_card();
    }

    pub fn remove_selected_card(&mut self) {
        let id = self
            .dashboard
            .selected_card
            .and_then(|idx| self.dashboard.selection.get(idx))
            .map(|c| c.channel_id.clone());
        if let Some(id) = id {
            self.remove_channel(&id);
        }
    }

    pub fn next_card(&mut self) {
        let len = self.dashboard.selection.len();
        if len > 0 {
            let current = self.dashboard.selected_card.unwrap_or(0);
            self.dashboard.selected_card = Some((current + 1) % len);
        }
    }

    pub fn previous_card(&mut self) {
        let len = self.dashboard.selection.len();
        if len > 0 {
            let current = self.dashboard.selected_card.unwrap_or(0);
            self.dashboard.selected_card = Some(if current == 0 { len - 1 } else { current - 1 });
        }
    }

    pub fn list_name_char(&mut self, ch: char) {
        self.dashboard.list_name.push(ch);
    }

    pub fn list_name_backspace(&mut self) {
        self.dashboard.list_name.pop();
    }

    pub fn create_list(&mut self) {
        let dashboard = &mut self.dashboard;
        match lists::create_list(&mut dashboard.list_name, &mut dashboard.selection) {
            Ok(draft) => {
                dashboard.status_message = Some(format!(
                    "Created \"{}\" with {} channels",
                    draft.name,
                    draft.channels.len()
                ));
                dashboard.last_created = Some(draft);
                dashboard.selected_card = None;
            }
            Err(e) => {
                dashboard.status_message = Some(e.to_string());
            }
        }
    }

    pub async fn process_async_action(&mut self, client: &TubeShareClient) -> anyhow::Result<()> {
        if let Some(action) = self.pending_async_action.take() {
            match action {
                AsyncAction::VerifySession => {
                    if self.auth.check(client).await {
                        self.sign_in_message = None;
                        self.auth.login(&mut self.router);
                    } else {
                        self.sign_in_message = Some(
                            "No active session yet. Finish signing in, then press Enter again."
                                .to_string(),
                        );
                    }
                }
                AsyncAction::Logout => {
                    self.auth.logout(client, &mut self.router).await;
                    self.dashboard.reset();
                }
            }
        }
        Ok(())
    }
}

pub struct App {
    pub state: AppState,
    client: TubeShareClient,
    search_tx: mpsc::UnboundedSender<SearchOutcome>,
    search_rx: mpsc::UnboundedReceiver<SearchOutcome>,
    needs_refresh: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = TubeShareClient::from_config(config)?;
        Ok(Self::with_client(client, config.debounce()))
    }

    pub fn with_client(client: TubeShareClient, debounce: Duration) -> Self {
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::with_debounce(debounce),
            client,
            search_tx,
            search_rx,
            needs_refresh: false,
        }
    }

    pub fn client(&self) -> &TubeShareClient {
        &self.client
    }

    /// One-shot startup auth check, resolved before the first frame.
    pub async fn init(&mut self) {
        let authenticated = self.state.auth.check(&self.client).await;
        info!("Startup auth check: authenticated={}", authenticated);
        self.state.enforce_guard();
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        self.drain_search_outcomes();

        if let Some(request) = self.state.poll_search(Instant::now()) {
            self.dispatch_search(request);
        }

        match self.state.process_async_action(&self.client).await {
            Ok(()) => {}
            Err(e) => {
                warn!("Error processing async action: {}", e);
                self.state.pending_async_action = None;
            }
        }

        self.state.enforce_guard();
        Ok(())
    }

    /// Spawn the lookup; its outcome comes back through the search channel.
    pub fn dispatch_search(&self, request: SearchRequest) {
        info!("Searching channels for {:?} (#{})", request.query, request.seq);
        let client = self.client.clone();
        let tx = self.search_tx.clone();
        tokio::spawn(async move {
            let outcome = run_search(&client, request).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(outcome);
        });
    }

    pub fn drain_search_outcomes(&mut self) {
        while let Ok(outcome) = self.search_rx.try_recv() {
            if self.state.apply_search_outcome(outcome) {
                self.needs_refresh = true;
            }
        }
    }

    /// Wait for the next search response and apply it.
    pub async fn next_search_outcome(&mut self) -> bool {
        match self.search_rx.recv().await {
            Some(outcome) => {
                let applied = self.state.apply_search_outcome(outcome);
                self.needs_refresh |= applied;
                applied
            }
            None => false,
        }
    }

    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }
}
