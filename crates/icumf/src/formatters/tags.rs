//! Tag formatters for HTML and Markdown output.
//!
//! Neither formatter renders children itself: they return the markup that
//! goes around a tag's children, and the renderer renders the children in
//! place, so directives nested inside tags go through the same renderer.

use crate::formatters::{TagFormatter, TagMarkup};
use crate::interpreter::{FormatContext, FormatError};
use crate::parser::TagNode;
use crate::types::Args;

/// Renders tags as HTML elements. Attribute values are escaped.
///
/// `<a href="/x">hi</a>` renders as `<a href="/x">hi</a>`. Attributes are
/// emitted in name order; bare attributes such as `hidden` stay bare and
/// `title=""` keeps its empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTags;

impl TagFormatter for HtmlTags {
    fn format_tag<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        tag: &'n TagNode,
        _args: &Args,
    ) -> Result<TagMarkup<'n>, FormatError> {
        let mut open = String::with_capacity(tag.tag.len() + 2);
        open.push('<');
        open.push_str(&tag.tag);
        for (name, value) in &tag.attributes {
            open.push(' ');
            open.push_str(name);
            if let Some(value) = value {
                open.push_str("=\"");
                open.push_str(&escape_attribute(value));
                open.push('"');
            }
        }
        open.push('>');
        Ok(TagMarkup::new(open, &tag.children, format!("</{}>", tag.tag)))
    }
}

/// Renders tags as Markdown.
///
/// | tag                   | output           |
/// |-----------------------|------------------|
/// | `b`, `strong`         | `**text**`       |
/// | `i`, `em`             | `_text_`         |
/// | `s`, `del`, `strike`  | `~~text~~`       |
/// | `code`                | `` `text` ``     |
/// | `a href="url"`        | `[text](url)`    |
///
/// Other tags render their children only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTags;

impl TagFormatter for MarkdownTags {
    fn format_tag<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        tag: &'n TagNode,
        _args: &Args,
    ) -> Result<TagMarkup<'n>, FormatError> {
        let children = tag.children.as_slice();
        let markup = match tag.tag.to_ascii_lowercase().as_str() {
            "b" | "strong" => TagMarkup::new("**", children, "**"),
            "i" | "em" => TagMarkup::new("_", children, "_"),
            "s" | "del" | "strike" => TagMarkup::new("~~", children, "~~"),
            "code" => TagMarkup::new("`", children, "`"),
            "a" => match tag.attributes.get("href").and_then(Option::as_deref) {
                Some(href) => TagMarkup::new("[", children, format!("]({href})")),
                None => TagMarkup::bare(children),
            },
            _ => TagMarkup::bare(children),
        };
        Ok(markup)
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
