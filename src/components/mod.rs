// ABOUTME: UI components for the TUI interface including landing, sign-in, dashboard, and help

pub mod dashboard;
pub mod help;
pub mod landing;
pub mod layout;
pub mod selection_list;
pub mod sign_in;

pub use dashboard::DashboardComponent;
pub use help::HelpComponent;
pub use landing::LandingComponent;
pub use layout::LayoutComponent;
pub use selection_list::SelectionListComponent;
pub use sign_in::SignInComponent;
