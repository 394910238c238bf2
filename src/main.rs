//! GoodBite Frontend Entry Point

mod app;
mod catalog;
mod components;
mod data;
mod deck;
mod matching;
mod models;
mod progress;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
