#![allow(warnings)]
//! Recipe UI Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod credentials;
mod error;
mod feedback;
mod models;
mod navigation;
mod pages;
mod render;
mod scope;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("RecipeUi", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
