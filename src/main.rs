//! Motion Portfolio
//!
//! A single-page animated portfolio rendered in a desktop webview, with
//! scroll- and pointer-driven animations orchestrated from Rust.

mod app;
mod bridge;
mod components;
mod config;
mod constants;
mod core;
mod motion;
mod sections;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::config::SiteConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let site = SiteConfig::load();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(site.window_title.clone())
                .with_inner_size(LogicalSize::new(site.window_width, site.window_height))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    log::info!("starting portfolio (api origin {})", site.api_origin);

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(site)
        .launch(app::App);
}
