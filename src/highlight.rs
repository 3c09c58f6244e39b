use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

// Syntax and theme sets are expensive to load; one instance serves every post.
static HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(Highlighter::new);

struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    fn new() -> Highlighter {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(THEME).unwrap_or_default();
        Highlighter { syntaxes, theme }
    }

    fn block_to_html(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        match highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme) {
            Ok(html) => html,
            // keep the code visible even when highlighting fails
            Err(_) => format!("<pre><code>{}</code></pre>", escape(code)),
        }
    }
}

fn escape(code: &str) -> String {
    code.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replace code blocks in a pulldown-cmark event stream with pre-highlighted
/// HTML blocks, leaving every other event untouched.
pub fn highlight<'a, It>(events: It) -> impl Iterator<Item = Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut in_code_block = false;
    let mut lang = String::new();
    let mut to_highlight = String::new();
    let mut out_events = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                lang = match kind {
                    CodeBlockKind::Fenced(token) => token.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) if in_code_block => {
                let html = HIGHLIGHTER.block_to_html(&to_highlight, &lang);
                to_highlight.clear();
                in_code_block = false;
                out_events.push(Event::Html(CowStr::from(html)));
            }
            Event::Text(text) if in_code_block => {
                to_highlight.push_str(&text);
            }
            other => {
                out_events.push(other);
            }
        }
    }

    out_events.into_iter()
}
