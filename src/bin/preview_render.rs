//! Preview binary - renders a saved lookup response the way the widget shows it
//!
//! Usage:
//!   cargo run --bin preview -- response.json          # Heading taken from the file name
//!   cargo run --bin preview -- response.json hello    # Explicit heading word
//!   cargo run --bin preview -- --text response.json   # Plain text instead of HTML
//!
//! Optional:
//! - DICT_UI_LANG (zh or en, defaults to zh)

use ai_dictionary::api::LookupResponse;
use ai_dictionary::config::Config;
use ai_dictionary::render::{self, ResultsPanel};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ai_dictionary=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = args.iter().any(|arg| arg == "--text");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let path = positional
        .next()
        .map(Path::new)
        .context("Usage: preview [--text] <response.json> [word]")?;
    let word = match positional.next() {
        Some(word) => word.clone(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let config = Config::from_env()?;
    let response = LookupResponse::from_file(path)?;
    info!(
        "Rendering {} definitions for '{}'",
        response.definitions().len(),
        word
    );

    if text {
        let panel = ResultsPanel::Lookup(render::render(&word, &response, config.strings()));
        println!("{}", panel);
    } else {
        let html = render::render_html(&word, &response, config.strings())
            .context("Failed to render results")?;
        println!("{}", html);
    }

    Ok(())
}
