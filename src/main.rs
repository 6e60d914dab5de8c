//! UI Lab demo entry point
//!
//! Builds the showcase screen for the requested color scheme and prints it
//! as JSON. The scheme comes from the first argument or the `UI_LAB_THEME`
//! environment variable, defaulting to light.

use anyhow::{Context, Result};
use app_ui::screens::HomeScreen;
use app_ui::theme::ThemeName;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scheme = resolve_scheme()?;
    tracing::info!(scheme = %scheme, "Building the UI Lab showcase");

    let screen = HomeScreen::new(scheme);
    let json = serde_json::to_string_pretty(&screen).context("serializing the showcase screen")?;
    println!("{json}");

    Ok(())
}

/// Scheme from the first argument, then `UI_LAB_THEME`, then light
fn resolve_scheme() -> Result<ThemeName> {
    let requested = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("UI_LAB_THEME").ok());

    match requested {
        Some(name) => name
            .parse()
            .with_context(|| format!("unsupported color scheme {name:?}")),
        None => Ok(ThemeName::default()),
    }
}
