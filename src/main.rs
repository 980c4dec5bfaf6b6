//! Terminal front end for the dictionary lookup widget.
//!
//! Usage:
//!   ai-dictionary                    # Interactive: type words, or :help for commands
//!   ai-dictionary en-zh-hello        # One-shot lookup in <source>-<target>-<word> form
//!   ai-dictionary --html en-zh-hello # Print the results markup instead of text
//!
//! Optional environment variables:
//! - DICT_API_URL (defaults to http://localhost:8080)
//! - DICT_UI_LANG (zh or en, defaults to zh)
//! - DICT_REQUEST_TIMEOUT_SECS (no timeout by default)

use ai_dictionary::api::{ApiClient, LookupRequest};
use ai_dictionary::config::Config;
use ai_dictionary::i18n::{Language, LanguageRegistry};
use ai_dictionary::widget::{SearchOutcome, UiEvent, Widget};
use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const HELP: &str = "\
Type a word and press Enter to look it up.

Commands:
  :source <code>  Change the source language
  :target <code>  Change the target language
  :langs          Show available language pairs
  :html           Toggle HTML output
  :quit           Exit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ai_dictionary=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let api = ApiClient::new(&config).context("Failed to build HTTP client")?;
    let widget = Widget::new(api, config.strings());

    info!("Loading configuration from {}", config.api_url);
    widget.init().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let html = args.iter().any(|arg| arg == "--html");

    match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(query) => run_once(&widget, query, html).await,
        None => run_interactive(&widget, html).await,
    }
}

async fn run_once(widget: &Widget, query: &str, html: bool) -> Result<()> {
    let request = LookupRequest::parse_compact(query)
        .with_context(|| format!("Expected <source>-<target>-<word>, got '{}'", query))?;

    let source = Language::from_code(&request.source)?;
    widget.select_source(source.code());
    if !widget.select_target(&request.target) {
        bail!(
            "Target language '{}' is not available for {} (available: {})",
            request.target,
            source.label(),
            widget.page().target.values().join(", ")
        );
    }
    widget.set_word(&request.word);

    let outcome = widget.search().await;
    print_results(widget, html)?;

    match outcome {
        SearchOutcome::Rendered => Ok(()),
        other => bail!("Lookup did not succeed: {:?}", other),
    }
}

async fn run_interactive(widget: &Widget, mut html: bool) -> Result<()> {
    println!("{}\n", HELP);
    print_pair(widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or_default();

        match command {
            ":quit" | ":q" => break,
            ":help" => println!("{}", HELP),
            ":langs" => print_languages(widget),
            ":html" => {
                html = !html;
                println!("HTML output {}", if html { "on" } else { "off" });
            }
            ":source" => {
                widget
                    .handle_event(UiEvent::SourceChanged(argument.to_string()))
                    .await;
                print_pair(widget);
            }
            ":target" => {
                widget
                    .handle_event(UiEvent::TargetChanged(argument.to_string()))
                    .await;
                print_pair(widget);
            }
            _ => {
                widget
                    .handle_event(UiEvent::WordInput(line.to_string()))
                    .await;
                match widget
                    .handle_event(UiEvent::KeyDown("Enter".to_string()))
                    .await
                {
                    Some(SearchOutcome::NotReady) => {
                        println!("No language pair available. Use :langs to see the options.");
                    }
                    Some(SearchOutcome::Superseded) | None => {}
                    Some(_) => print_results(widget, html)?,
                }
            }
        }
    }

    Ok(())
}

fn print_results(widget: &Widget, html: bool) -> Result<()> {
    let results = widget.page().results;
    if html {
        println!("{}", results.to_html().context("Failed to render results")?);
    } else {
        println!("{}", results);
    }
    Ok(())
}

fn print_pair(widget: &Widget) {
    let page = widget.page();
    let registry = LanguageRegistry::get();
    let source = page.source.selected().unwrap_or_default();
    let target = match page.target.selected() {
        Some(code) => registry.label_for(code).to_string(),
        None => page
            .target
            .options
            .first()
            .map(|option| option.label.clone())
            .unwrap_or_default(),
    };
    println!("[{} -> {}]", registry.label_for(source), target);
}

fn print_languages(widget: &Widget) {
    let configuration = widget.store().snapshot();
    let registry = LanguageRegistry::get();

    let sources = configuration.sources();
    if sources.is_empty() {
        println!("{}", widget.strings().no_targets);
        return;
    }

    for source in sources {
        let targets: Vec<&str> = configuration
            .targets_for(source)
            .iter()
            .map(|code| registry.label_for(code))
            .collect();
        println!("{}: {}", registry.label_for(source), targets.join(", "));
    }
}
