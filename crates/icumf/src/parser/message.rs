//! Message pattern parser using winnow.
//!
//! Parses a pattern string into a sequence of [`Node`]s. Handles:
//! - Literal text segments
//! - Directives `{arg}`, `{arg, kind}` and `{arg, kind, style}`
//! - Sub-messages `{arg, plural, one {...} other {...}}`, nested to any depth
//! - `#` inside numeric sub-messages
//! - Inline tags `<b class="x">...</b>`
//! - Backslash escapes: `\{ \} \< \> \# \\`

use std::collections::BTreeMap;

use winnow::combinator::{alt, cut_err, delimited, fail, not, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, literal, one_of, take_till, take_while};

use super::ast::{COUNT_KIND, FormatNode, MessageNode, Node, TagNode, VALUE_KIND};
use super::error::ParseError;

/// Tells the parser which directive kinds take a sub-message style and which
/// bind `#` to their numeric argument.
pub trait DirectiveKinds {
    /// True if the kind's style is a set of selector-keyed sub-messages.
    fn is_submessage(&self, kind: &str) -> bool;

    /// True if `#` inside the kind's sub-messages stands for its argument.
    fn is_subnumeric(&self, kind: &str) -> bool;
}

/// Parse a pattern into a node sequence.
///
/// `kinds` decides how directive styles are read; it is normally the
/// formatter registry the message will later be rendered with.
pub fn parse_message(input: &str, kinds: &dyn DirectiveKinds) -> Result<Vec<Node>, ParseError> {
    let parser = MessageParser { kinds };
    let mut remaining = input;
    match parser.message(&mut remaining, Scope::default()) {
        Ok(nodes) => {
            if remaining.is_empty() {
                Ok(nodes)
            } else {
                let (line, column) = calculate_position(input, remaining);
                let message = if remaining.starts_with("</") {
                    "closing tag without a matching opening tag".to_string()
                } else if remaining.starts_with('}') {
                    "unmatched '}'".to_string()
                } else {
                    format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    )
                };
                Err(ParseError::Syntax {
                    line,
                    column,
                    message,
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            let message = describe(&e);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof {
                    line,
                    column,
                    message,
                })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message,
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Render a winnow error as a single-line description.
fn describe(error: &ErrMode<ContextError>) -> String {
    match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
            let text = e.to_string();
            if text.is_empty() {
                "invalid syntax".to_string()
            } else {
                text.replace('\n', "; ")
            }
        }
        ErrMode::Incomplete(_) => "incomplete input".to_string(),
    }
}

/// Parsing state that changes with nesting.
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'i> {
    /// Argument `#` refers to, set inside numeric sub-messages.
    pound_arg: Option<&'i str>,
}

struct MessageParser<'k> {
    kinds: &'k dyn DirectiveKinds,
}

impl MessageParser<'_> {
    /// Parse nodes until end of input, a `}` or a `</`.
    fn message<'i>(&self, input: &mut &'i str, scope: Scope<'i>) -> ModalResult<Vec<Node>> {
        let nodes: Vec<Node> =
            repeat(0.., |i: &mut &'i str| self.node(i, scope)).parse_next(input)?;
        Ok(merge_text(nodes))
    }

    fn node<'i>(&self, input: &mut &'i str, scope: Scope<'i>) -> ModalResult<Node> {
        alt((
            escape,
            |i: &mut &'i str| pound(i, scope),
            |i: &mut &'i str| self.directive(i, scope),
            |i: &mut &'i str| self.tag(i, scope),
            text,
            stray_char,
        ))
        .parse_next(input)
    }

    /// Parse a directive: `{arg}`, `{arg, kind}`, `{arg, kind, style}` or a sub-message.
    fn directive<'i>(&self, input: &mut &'i str, scope: Scope<'i>) -> ModalResult<Node> {
        '{'.parse_next(input)?;
        ws(input)?;
        let arg_name = cut_err(word)
            .context(StrContext::Label("argument name"))
            .parse_next(input)?;
        ws(input)?;

        if opt('}').parse_next(input)?.is_some() {
            return Ok(Node::Format(FormatNode {
                arg_name: arg_name.to_string(),
                kind: VALUE_KIND.to_string(),
                style: None,
            }));
        }

        cut_err(',')
            .context(StrContext::Expected(StrContextValue::CharLiteral(',')))
            .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
            .parse_next(input)?;
        ws(input)?;
        let kind = cut_err(word)
            .context(StrContext::Label("argument type"))
            .parse_next(input)?;
        ws(input)?;

        if self.kinds.is_submessage(kind) {
            cut_err(',')
                .context(StrContext::Expected(StrContextValue::Description(
                    "`,` followed by selectors",
                )))
                .parse_next(input)?;
            let pound_arg = if self.kinds.is_subnumeric(kind) {
                Some(arg_name)
            } else {
                scope.pound_arg
            };
            let selectors = self.selectors(input, Scope { pound_arg })?;
            ws(input)?;
            close_brace(input)?;
            return Ok(Node::Message(MessageNode {
                arg_name: arg_name.to_string(),
                kind: kind.to_string(),
                selectors,
            }));
        }

        let style = opt(preceded(',', take_till(0.., ['{', '}']))).parse_next(input)?;
        cut_err('}')
            .context(StrContext::Label("directive style"))
            .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
            .parse_next(input)?;

        Ok(Node::Format(FormatNode {
            arg_name: arg_name.to_string(),
            kind: kind.to_string(),
            style: style
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        }))
    }

    /// Parse `key {message}` pairs until the closing brace of the directive.
    fn selectors<'i>(
        &self,
        input: &mut &'i str,
        scope: Scope<'i>,
    ) -> ModalResult<BTreeMap<String, Vec<Node>>> {
        let mut selectors = BTreeMap::new();
        loop {
            ws(input)?;
            let checkpoint = *input;
            let Some(key) = opt(selector_key).parse_next(input)? else {
                break;
            };
            if selectors.contains_key(key) {
                *input = checkpoint;
                return reject(input, "a selector key not used earlier");
            }
            ws(input)?;
            cut_err('{')
                .context(StrContext::Label("selector"))
                .context(StrContext::Expected(StrContextValue::CharLiteral('{')))
                .parse_next(input)?;
            let branch = self.message(input, scope)?;
            close_brace(input)?;
            selectors.insert(key.to_string(), branch);
        }
        if selectors.is_empty() {
            return reject(input, "at least one selector");
        }
        Ok(selectors)
    }

    /// Parse an inline tag with its children and matching closing tag.
    fn tag<'i>(&self, input: &mut &'i str, scope: Scope<'i>) -> ModalResult<Node> {
        let name = preceded('<', tag_name).parse_next(input)?;
        let attributes = attributes(input)?;
        ws(input)?;
        cut_err('>')
            .context(StrContext::Label("tag"))
            .context(StrContext::Expected(StrContextValue::CharLiteral('>')))
            .parse_next(input)?;

        let children = self.message(input, scope)?;

        cut_err("</")
            .context(StrContext::Expected(StrContextValue::Description(
                "closing tag",
            )))
            .parse_next(input)?;
        cut_err(terminated(literal(name), not(tag_name_char)))
            .context(StrContext::Expected(StrContextValue::Description(
                "closing tag matching its opening tag",
            )))
            .parse_next(input)?;
        ws(input)?;
        cut_err('>')
            .context(StrContext::Label("closing tag"))
            .context(StrContext::Expected(StrContextValue::CharLiteral('>')))
            .parse_next(input)?;

        Ok(Node::Tag(TagNode {
            tag: name.to_string(),
            attributes,
            children,
        }))
    }
}

/// Merge adjacent text nodes into single nodes.
fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Text(text) => {
                if let Some(Node::Text(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Node::Text(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Fail without backtracking, describing what was expected instead.
fn reject<O>(input: &mut &str, expected: &'static str) -> ModalResult<O> {
    cut_err(fail)
        .context(StrContext::Expected(StrContextValue::Description(expected)))
        .parse_next(input)
}

fn close_brace(input: &mut &str) -> ModalResult<char> {
    cut_err('}')
        .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
        .parse_next(input)
}

/// Parse escape sequences: `\{ \} \< \> \# \\`.
///
/// A backslash before any other character is kept verbatim.
fn escape(input: &mut &str) -> ModalResult<Node> {
    preceded('\\', any)
        .map(|c: char| match c {
            '{' | '}' | '<' | '>' | '#' | '\\' => Node::Text(c.to_string()),
            other => Node::Text(format!("\\{other}")),
        })
        .parse_next(input)
}

/// Parse `#`: the enclosing numeric argument, or literal text outside one.
fn pound<'i>(input: &mut &'i str, scope: Scope<'i>) -> ModalResult<Node> {
    '#'.parse_next(input)?;
    Ok(match scope.pound_arg {
        Some(arg) => Node::Format(FormatNode {
            arg_name: arg.to_string(),
            kind: COUNT_KIND.to_string(),
            style: None,
        }),
        None => Node::text("#"),
    })
}

/// Parse a run of ordinary text.
fn text(input: &mut &str) -> ModalResult<Node> {
    take_till(1.., ['{', '}', '<', '\\', '#'])
        .map(Node::text)
        .parse_next(input)
}

/// Parse a `<` that does not open or close a tag, or a trailing backslash.
fn stray_char(input: &mut &str) -> ModalResult<Node> {
    alt((terminated('<', not('/')), '\\'))
        .map(|c: char| Node::Text(c.to_string()))
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an argument name or type: one or more word characters.
fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

/// Parse a selector key: `one`, `other`, `=0`, `=-1`, `male`.
fn selector_key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '=' | '-' | '.')
    })
    .parse_next(input)
}

/// Parse a tag name: a letter followed by name characters.
fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., is_tag_name_char),
    )
        .take()
        .parse_next(input)
}

fn tag_name_char(input: &mut &str) -> ModalResult<char> {
    one_of(is_tag_name_char).parse_next(input)
}

fn is_tag_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':')
}

/// Parse tag attributes: `name`, `name=value`, `name="value"`, `name='value'`.
fn attributes(input: &mut &str) -> ModalResult<BTreeMap<String, Option<String>>> {
    let pairs: Vec<(String, Option<String>)> =
        repeat(0.., preceded(ws1, attribute)).parse_next(input)?;
    Ok(pairs.into_iter().collect())
}

/// A bare attribute has no value; `name=""` has an empty one.
fn attribute(input: &mut &str) -> ModalResult<(String, Option<String>)> {
    let name = take_while(1.., is_tag_name_char).parse_next(input)?;
    let value = opt(preceded((ws, '=', ws), cut_err(attribute_value))).parse_next(input)?;
    Ok((name.to_string(), value))
}

fn attribute_value(input: &mut &str) -> ModalResult<String> {
    alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
        take_while(1.., |c: char| !c.is_whitespace() && !matches!(c, '<' | '>')),
    ))
    .context(StrContext::Label("attribute value"))
    .map(ToString::to_string)
    .parse_next(input)
}

fn ws1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}
