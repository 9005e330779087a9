// ABOUTME: Library crate for TubeShare exposing public API for testing and external use

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
