//! Be Admin Frontend Entry Point

mod app;
mod components;
mod config;
mod error;
mod models;
mod pagination;
mod services;
mod session;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
