//! Referral Dashboard - Yew WASM Frontend
//!
//! This crate provides the web UI for the referral program dashboard:
//! stat cards, the referral link copy/share widget, and the recent
//! referrals table.

mod app;
mod components;
mod env;
mod notify;
mod pages;

pub use app::App;
pub use env::BrowserEnv;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
