//! UpThrift - Dioxus Web Application
//!
//! Client-rendered front-end over `upthrift-core`. All state lives in the
//! core `AppMachine`; views dispatch events into it.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Desktop window:
//! ```bash
//! dx serve --platform desktop --no-default-features --features desktop
//! ```

#![allow(non_snake_case)]

#[cfg(not(any(feature = "web", feature = "desktop")))]
compile_error!("enable the `web` or `desktop` feature");

mod app;
mod components;
mod pages;
mod photos;
mod state;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use upthrift_core::machines::AppMachine;
use upthrift_core::Config;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    let machine = match build_machine() {
        Ok(machine) => machine,
        Err(error) => {
            tracing::error!(error = ?error, "Failed to start UpThrift");
            return;
        }
    };

    LaunchBuilder::new().with_context(machine).launch(app::App);
}

fn build_machine() -> Result<AppMachine> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let config = with_page_origin(config);
    tracing::info!(
        page_size = config.page_size,
        origin = %config.public_origin,
        "Configuration loaded"
    );

    AppMachine::from_config(config).context("Failed to load listing seed")
}

/// Listing links point back at the page the app is served from.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn with_page_origin(mut config: Config) -> Config {
    if let Some(origin) = web_sys::window().and_then(|window| window.location().origin().ok()) {
        config.public_origin = origin;
    }
    config
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn with_page_origin(config: Config) -> Config {
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("upthrift=info,upthrift_core=info,upthrift_web=info")),
        )
        .init();
}
