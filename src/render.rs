//! Result rendering.
//!
//! A lookup response is first turned into a [`RenderedLookup`] display model,
//! which the results panel then emits as HTML (askama, auto-escaped) or as
//! plain text for the terminal.

use askama::Template;
use std::fmt;

use crate::api::LookupResponse;
use crate::i18n::LanguageStrings;

/// One rendered definition entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub pos: String,
    pub meaning: String,
    pub example: Option<String>,
}

/// Display model of a lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLookup {
    pub word: String,
    pub phonetic: Option<String>,
    /// Empty when no definition was found
    pub entries: Vec<RenderedEntry>,
    pub not_found: &'static str,
    pub bullet: &'static str,
    pub example_prefix: &'static str,
}

/// Build the display model for `response`, headed by `word`.
pub fn render(word: &str, response: &LookupResponse, strings: &'static LanguageStrings) -> RenderedLookup {
    let entries = response
        .definitions()
        .iter()
        .map(|def| RenderedEntry {
            pos: def.pos.clone(),
            meaning: def.m.clone(),
            example: def.ex.clone(),
        })
        .collect();

    RenderedLookup {
        word: word.to_string(),
        phonetic: response.p.clone(),
        entries,
        not_found: strings.no_definition,
        bullet: strings.bullet,
        example_prefix: strings.example_prefix,
    }
}

/// Render `response` straight to HTML.
pub fn render_html(
    word: &str,
    response: &LookupResponse,
    strings: &'static LanguageStrings,
) -> askama::Result<String> {
    ResultsPanel::Lookup(render(word, response, strings)).to_html()
}

struct EntryView<'a> {
    pos: &'a str,
    meaning: &'a str,
    example: Option<&'a str>,
}

#[derive(Template)]
#[template(
    source = r#"<h2>{{ word }}</h2><div class="phonetics">{% if let Some(p) = phonetic %}<span>{{ p }}</span>{% endif %}</div>
{%- if entries.is_empty() -%}
<p>{{ not_found }}</p>
{%- else -%}
{%- for entry in entries -%}
<div class="entry"><div class="part-of-speech">{{ entry.pos }}</div><div class="definition-block"><p>{{ bullet }}{{ entry.meaning }}</p>
{%- if let Some(ex) = entry.example -%}
<div class="example"><p>{{ example_prefix }}{{ ex }}</p></div>
{%- endif -%}
</div></div>
{%- endfor -%}
{%- endif -%}"#,
    ext = "html"
)]
struct LookupTemplate<'a> {
    word: &'a str,
    phonetic: Option<&'a str>,
    entries: Vec<EntryView<'a>>,
    not_found: &'a str,
    bullet: &'a str,
    example_prefix: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<p{% if is_error %} style="color: red;"{% endif %}>{{ text }}</p>"#,
    ext = "html"
)]
struct MessageTemplate<'a> {
    text: &'a str,
    is_error: bool,
}

/// Content of the results container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsPanel {
    #[default]
    Empty,
    /// Interim message while a lookup is outstanding
    Searching(String),
    Error(String),
    Lookup(RenderedLookup),
}

impl ResultsPanel {
    /// Markup for the results container. All text is HTML-escaped.
    pub fn to_html(&self) -> askama::Result<String> {
        match self {
            ResultsPanel::Empty => Ok(String::new()),
            ResultsPanel::Searching(text) => MessageTemplate {
                text,
                is_error: false,
            }
            .render(),
            ResultsPanel::Error(text) => MessageTemplate {
                text,
                is_error: true,
            }
            .render(),
            ResultsPanel::Lookup(lookup) => LookupTemplate {
                word: &lookup.word,
                phonetic: lookup.phonetic.as_deref(),
                entries: lookup
                    .entries
                    .iter()
                    .map(|entry| EntryView {
                        pos: &entry.pos,
                        meaning: &entry.meaning,
                        example: entry.example.as_deref(),
                    })
                    .collect(),
                not_found: lookup.not_found,
                bullet: lookup.bullet,
                example_prefix: lookup.example_prefix,
            }
            .render(),
        }
    }
}

/// Plain-text form for terminals.
impl fmt::Display for ResultsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsPanel::Empty => Ok(()),
            ResultsPanel::Searching(text) | ResultsPanel::Error(text) => write!(f, "{}", text),
            ResultsPanel::Lookup(lookup) => {
                writeln!(f, "{}", lookup.word)?;
                if let Some(phonetic) = &lookup.phonetic {
                    writeln!(f, "{}", phonetic)?;
                }
                if lookup.entries.is_empty() {
                    return write!(f, "{}", lookup.not_found);
                }
                for entry in &lookup.entries {
                    writeln!(f)?;
                    writeln!(f, "{}", entry.pos)?;
                    writeln!(f, "  {}{}", lookup.bullet, entry.meaning)?;
                    if let Some(example) = &entry.example {
                        writeln!(f, "  {}{}", lookup.example_prefix, example)?;
                    }
                }
                Ok(())
            }
        }
    }
}
