// ABOUTME: Main application structure and state management for the TUI

pub mod auth;
pub mod debounce;
pub mod events;
pub mod lists;
pub mod route;
pub mod search;
pub mod state;

pub use auth::{AuthState, AuthStatus};
pub use events::{AppEvent, EventHandler};
pub use route::{Route, Router};
pub use state::{App, AppState};
