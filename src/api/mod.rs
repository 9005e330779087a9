// ABOUTME: Client for the external TubeShare HTTP services (channel search, auth check, logout)

pub mod client;
pub mod error;

pub use client::TubeShareClient;
pub use error::ApiError;
