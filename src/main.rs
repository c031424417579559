//! Todo Frontend Entry Point

mod logger;
mod browser;
mod store;
mod context;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
