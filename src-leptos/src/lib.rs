//! DM Assistant - Leptos Frontend Library

pub mod actions;
pub mod app;
pub mod components;
pub mod formatters;
pub mod pages;
pub mod tauri;
