pub mod api;
pub mod app;
pub mod channel;
pub mod components;
pub mod config;
pub mod html;
pub mod i18n;
pub mod models;
pub mod pages;

use app::App;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    // Init panic hook to avoid Dioxus overlay crashes
    console_error_panic_hook::set_once();

    launch(App);
}
