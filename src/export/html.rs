//! Markdown to HTML conversion.

use std::sync::OnceLock;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

/// Parser configuration for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkdownFlavor {
    /// CommonMark with the table and strikethrough extensions.
    #[default]
    CommonMark,
    /// Tables, strikethrough, footnotes, and heading attributes. Code blocks
    /// sit in a `codehilite` container and fenced blocks are highlighted.
    Extra,
}

impl MarkdownFlavor {
    fn options(self) -> Options {
        let mut options = Options::empty();
        match self {
            MarkdownFlavor::CommonMark => {
                options.insert(Options::ENABLE_TABLES);
                options.insert(Options::ENABLE_STRIKETHROUGH);
            }
            MarkdownFlavor::Extra => {
                options.insert(Options::ENABLE_TABLES);
                options.insert(Options::ENABLE_STRIKETHROUGH);
                options.insert(Options::ENABLE_FOOTNOTES);
                options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
            }
        }
        options
    }
}

const CODEHILITE_OPEN: &str = "<div class=\"codehilite\">\n";
const CODEHILITE_CLOSE: &str = "</div>\n";

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Converts markdown text to an HTML fragment.
///
/// # Example
///
/// ```
/// use mdexport::export::{MarkdownFlavor, markdown_to_html};
///
/// let html = markdown_to_html("# Hello\n\n~~World~~", MarkdownFlavor::CommonMark);
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<del>World</del>"));
/// ```
pub fn markdown_to_html(markdown: &str, flavor: MarkdownFlavor) -> String {
    let parser = Parser::new_ext(markdown, flavor.options());
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);

    match flavor {
        MarkdownFlavor::CommonMark => html::push_html(&mut html_output, parser),
        MarkdownFlavor::Extra => {
            html::push_html(&mut html_output, highlight_code_blocks(parser).into_iter())
        }
    }

    html_output
}

/// Wraps every code block in a `codehilite` div. Fenced blocks in a
/// language known to syntect are replaced by classed token spans.
fn highlight_code_blocks<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut block: Option<(CodeBlockKind<'a>, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => block = Some((kind, String::new())),
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(Tag::CodeBlock(_)) => {
                if let Some((kind, code)) = block.take() {
                    out.push(Event::Html(CODEHILITE_OPEN.into()));
                    push_code_block(&mut out, kind, code);
                    out.push(Event::Html(CODEHILITE_CLOSE.into()));
                }
            }
            other => out.push(other),
        }
    }

    out
}

fn push_code_block<'a>(out: &mut Vec<Event<'a>>, kind: CodeBlockKind<'a>, code: String) {
    if let CodeBlockKind::Fenced(info) = &kind {
        if let Some(highlighted) = highlight(info, &code) {
            out.push(Event::Html(highlighted.into()));
            return;
        }
    }
    out.push(Event::Start(Tag::CodeBlock(kind.clone())));
    out.push(Event::Text(code.into()));
    out.push(Event::End(Tag::CodeBlock(kind)));
}

/// Highlights `code` for the first word of a fence info string.
///
/// Returns `None` for an empty or unknown language.
fn highlight(info: &str, code: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    if !token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '#' | '.'))
    {
        return None;
    }

    let syntaxes = syntax_set();
    let syntax = syntaxes.find_syntax_by_token(token)?;
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            debug!(language = token, %err, "highlighting failed; emitting plain code");
            return None;
        }
    }

    Some(format!(
        "<pre><code class=\"language-{token}\">{}</code></pre>\n",
        generator.finalize()
    ))
}

/// Returns the plain text of the first level-1 heading, if any.
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new_ext(markdown, MarkdownFlavor::CommonMark.options()) {
        match event {
            Event::Start(Tag::Heading(HeadingLevel::H1, _, _)) => in_heading = true,
            Event::End(Tag::Heading(HeadingLevel::H1, _, _)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_heading => text.push(' '),
            _ => {}
        }
    }

    None
}
