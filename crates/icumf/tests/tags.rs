//! Integration tests for inline tag rendering.

use icumf::{LocaleContext, MessageFormat, TagStyle, args};
use insta::assert_snapshot;

fn html() -> MessageFormat {
    MessageFormat::builder().strict(true).build()
}

fn markdown() -> MessageFormat {
    MessageFormat::builder()
        .strict(true)
        .tag_style(TagStyle::Markdown)
        .build()
}

const ITEMS: &str = "<b>{count, plural, one {one item} other {# items}}</b>";

// =============================================================================
// HTML
// =============================================================================

#[test]
fn html_tag_around_plural() {
    let text = html()
        .format(ITEMS, &LocaleContext::default(), &args! { "count" => 3 })
        .unwrap();
    assert_snapshot!(text, @"<b>3 items</b>");
}

#[test]
fn html_attributes_are_sorted_and_escaped() {
    let text = html()
        .format(
            r#"<a title='say "hi"' href="/u?a=1&b=2" hidden>{name}</a>"#,
            &LocaleContext::default(),
            &args! { "name" => "Ada" },
        )
        .unwrap();
    assert_snapshot!(
        text,
        @r#"<a hidden href="/u?a=1&amp;b=2" title="say &quot;hi&quot;">Ada</a>"#
    );
}

#[test]
fn html_empty_attribute_value_is_kept() {
    let text = html()
        .format(
            r#"<img alt="" hidden>x</img>"#,
            &LocaleContext::default(),
            &args! {},
        )
        .unwrap();
    assert_snapshot!(text, @r#"<img alt="" hidden>x</img>"#);
}

#[test]
fn html_nested_tags() {
    let text = html()
        .format(
            "<p>Hi <b><i>{name}</i></b></p>",
            &LocaleContext::default(),
            &args! { "name" => "Ada" },
        )
        .unwrap();
    assert_eq!(text, "<p>Hi <b><i>Ada</i></b></p>");
}

#[test]
fn html_is_the_default_style() {
    assert_eq!(MessageFormat::new().tag_style(), TagStyle::Html);
}

// =============================================================================
// Markdown
// =============================================================================

#[test]
fn markdown_tag_around_plural() {
    let text = markdown()
        .format(ITEMS, &LocaleContext::default(), &args! { "count" => 3 })
        .unwrap();
    assert_snapshot!(text, @"**3 items**");
}

#[test]
fn markdown_inline_styles() {
    let text = markdown()
        .format(
            "<strong>a</strong> <em>b</em> <del>c</del> <code>d</code>",
            &LocaleContext::default(),
            &args! {},
        )
        .unwrap();
    assert_snapshot!(text, @"**a** _b_ ~~c~~ `d`");
}

#[test]
fn markdown_link() {
    let text = markdown()
        .format(
            "Read <a href=\"https://example.com/{page}\">the docs</a>",
            &LocaleContext::default(),
            &args! { "page" => "intro" },
        )
        .unwrap();
    assert_eq!(text, "Read [the docs](https://example.com/{page})");
}

#[test]
fn markdown_unknown_tag_keeps_children() {
    let text = markdown()
        .format(
            "<span class=\"x\">{n, plural, one {# day} other {# days}}</span> left",
            &LocaleContext::default(),
            &args! { "n" => 1 },
        )
        .unwrap();
    assert_eq!(text, "1 day left");
}

#[test]
fn markdown_link_without_href_keeps_children() {
    let text = markdown()
        .format("<a name=\"top\">Top</a>", &LocaleContext::default(), &args! {})
        .unwrap();
    assert_eq!(text, "Top");
}
