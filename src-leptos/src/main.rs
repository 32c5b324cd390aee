//! DM Assistant - Leptos Frontend
//!
//! This is the Leptos-based frontend that runs inside Tauri WebView.
//! All persistence is handled by the Tauri backend via IPC.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use chrono as _;
use dm_assistant_types as _;
use gloo_timers as _;
use js_sys as _;
use serde as _;
use serde_json as _;
use serde_wasm_bindgen as _;
use uuid as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use dm_assistant_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("DM Assistant (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
