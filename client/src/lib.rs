//! # client
//!
//! Leptos + WASM frontend for the leaderboard service, plus the
//! target-neutral core it is built on.
//!
//! The core (`controller`, `state`, `net`, `util`) compiles for native and
//! wasm32 targets and is shared with the `cli` crate. The UI layer (`app`,
//! `pages`, `components`) binds controller snapshots to Leptos signals.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
