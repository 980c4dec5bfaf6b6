//! Integration tests for the dictionary lookup widget
//!
//! These tests drive the public API the way a page would: load the backend
//! configuration, pick languages, search, and read back the rendered results.
//! Both backend endpoints are served by wiremock.

use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use ai_dictionary::{
    api::{ApiClient, LookupResponse},
    config::Config,
    i18n::{CHINESE_STRINGS, ENGLISH_STRINGS},
    render::{self, ResultsPanel},
    store::Configuration,
    widget::{SearchOutcome, UiEvent, Widget},
};

// ==================== Test Helpers ====================

fn create_test_config(api_url: &str) -> Config {
    Config {
        api_url: api_url.to_string(),
        ui_language: "en".to_string(),
        request_timeout: Some(Duration::from_secs(5)),
    }
}

fn create_widget(api_url: &str) -> Widget {
    let config = create_test_config(api_url);
    let api = ApiClient::new(&config).expect("client should build");
    Widget::new(api, config.strings())
}

async fn mount_config(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn standard_config() -> serde_json::Value {
    serde_json::json!({
        "max_input_chars": 20,
        "available_pairs": {
            "en": ["zh", "ja"],
            "zh": ["en"]
        }
    })
}

// ==================== Full Flow Tests ====================

#[tokio::test]
async fn test_full_lookup_flow() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .and(query_param("word", "test"))
        .and(query_param("source", "en"))
        .and(query_param("target", "zh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "p": "/test/",
            "defs": [{"pos": "n.", "m": "a trial", "ex": "this is a test"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    assert!(widget.init().await);

    let page = widget.page();
    assert_eq!(page.source.selected(), Some("en"));
    assert_eq!(page.target.values(), vec!["zh", "ja"]);
    assert_eq!(page.target.options[0].label, "中文 (Chinese)");
    assert!(page.search_enabled);

    widget
        .handle_event(UiEvent::WordInput("test".to_string()))
        .await;
    let outcome = widget.handle_event(UiEvent::SearchClicked).await;
    assert_eq!(outcome, Some(SearchOutcome::Rendered));

    let html = widget.page().results.to_html().expect("render");
    assert!(html.contains("<h2>test</h2>"));
    assert!(html.contains("/test/"));
    assert!(html.contains(r#"<div class="part-of-speech">n.</div>"#));
    assert!(html.contains("• a trial"));
    assert!(html.contains("e.g., this is a test"));
}

#[tokio::test]
async fn test_switching_source_language_changes_targets() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    let widget = create_widget(&server.uri());
    widget.init().await;

    widget
        .handle_event(UiEvent::SourceChanged("zh".to_string()))
        .await;
    assert_eq!(widget.page().target.values(), vec!["en"]);

    widget
        .handle_event(UiEvent::SourceChanged("ru".to_string()))
        .await;
    let page = widget.page();
    assert!(page.target.disabled);
    assert!(!page.search_enabled);
    assert_eq!(page.target.options.len(), 1);
    assert_eq!(page.target.options[0].label, ENGLISH_STRINGS.no_targets);
}

#[tokio::test]
async fn test_limit_from_server_is_enforced() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    widget.init().await;

    widget.set_word("supercalifragilisticexpialidocious");
    assert_eq!(
        widget.search().await,
        SearchOutcome::InputTooLong { max: 20 }
    );
    assert_eq!(
        widget.page().results.to_html().unwrap(),
        r#"<p style="color: red;">Input is too long. At most 20 characters are allowed.</p>"#
    );
}

#[tokio::test]
async fn test_config_unavailable_leaves_widget_degraded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    assert!(!widget.init().await);
    assert_eq!(*widget.store().snapshot(), Configuration::default());

    widget.set_word("test");
    assert_eq!(widget.search().await, SearchOutcome::NotReady);
    assert_eq!(widget.page().results, ResultsPanel::Empty);
}

#[tokio::test]
async fn test_lookup_server_error_is_displayed() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    widget.init().await;
    widget.set_word("test");

    assert_eq!(widget.search().await, SearchOutcome::Failed);

    let html = widget.page().results.to_html().unwrap();
    assert!(html.contains("500"));
    assert!(html.contains("internal error"));
    assert!(html.contains(r#"style="color: red;""#));
}

#[tokio::test]
async fn test_server_supplied_markup_is_escaped() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "defs": [{"pos": "n.", "m": "<img src=x onerror=alert(1)>"}]
        })))
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    widget.init().await;
    widget.set_word("x<b>");

    assert_eq!(widget.search().await, SearchOutcome::Rendered);

    let html = widget.page().results.to_html().unwrap();
    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;img"));
}

#[tokio::test]
async fn test_missing_definitions_render_not_found() {
    let server = MockServer::start().await;
    mount_config(&server, standard_config()).await;

    Mock::given(method("GET"))
        .and(path("/api/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"p": "/zz/"})))
        .mount(&server)
        .await;

    let widget = create_widget(&server.uri());
    widget.init().await;
    widget.set_word("zzz");

    assert_eq!(widget.search().await, SearchOutcome::Rendered);
    let page = widget.page();
    assert_eq!(
        page.results.to_string(),
        "zzz\n/zz/\nNo definition found for this word."
    );
}

// ==================== Saved Response Tests ====================

#[test]
fn test_saved_response_file_renders() {
    let temp_dir = TempDir::new().expect("temp dir");
    let response_path = temp_dir.path().join("hello.json");
    std::fs::write(
        &response_path,
        r#"{"p": "/həˈləʊ/", "defs": [{"pos": "int.", "m": "你好", "ex": "Hello, world!"}]}"#,
    )
    .expect("write response");

    let response = LookupResponse::from_file(&response_path).expect("load response");
    let html = render::render_html("hello", &response, &CHINESE_STRINGS).expect("render");

    assert!(html.contains("<h2>hello</h2>"));
    assert!(html.contains("• 你好"));
    assert!(html.contains("e.g., Hello, world!"));
}

#[test]
fn test_saved_response_file_errors() {
    let temp_dir = TempDir::new().expect("temp dir");

    let missing = temp_dir.path().join("missing.json");
    let err = LookupResponse::from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));

    let broken = temp_dir.path().join("broken.json");
    std::fs::write(&broken, "not json").expect("write");
    let err = LookupResponse::from_file(&broken).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
