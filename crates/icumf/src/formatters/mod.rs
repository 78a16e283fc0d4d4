//! Formatters that turn directives and tags into text.
//!
//! A [`Formatter`] handles one directive kind (`plural`, `date`, ...) and is
//! looked up by that kind in the [`FormatterRegistry`]. A [`TagFormatter`]
//! handles every inline tag of a message. Formatters return [`Formatted`]:
//! either final text, or nodes for the renderer to keep rendering. Tag
//! formatters return the [`TagMarkup`] placed around a tag's children.

mod date;
mod number;
mod registry;
mod select;
mod tags;

use std::borrow::Cow;

use crate::interpreter::{FormatContext, FormatError, compute_suggestions};
use crate::parser::{FormatNode, MessageNode, Node, TagNode};
use crate::types::{Args, Numeric, Value};

pub use date::DateFormatter;
pub use number::{CountFormatter, NumberFormatter, ValueFormatter};
pub use registry::FormatterRegistry;
pub use select::{PluralFormatter, SelectFormatter};
pub use tags::{HtmlTags, MarkdownTags};

/// Selector key used when nothing else matches.
pub const OTHER: &str = "other";

/// Result of formatting a directive or tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<'n> {
    /// Final text, appended as-is.
    Final(String),
    /// Nodes to render with the same context and arguments.
    Continue(Cow<'n, [Node]>),
}

/// A directive as handed to a formatter.
#[derive(Debug, Clone, Copy)]
pub enum Directive<'n> {
    Format(&'n FormatNode),
    Message(&'n MessageNode),
}

impl<'n> Directive<'n> {
    pub fn arg_name(&self) -> &'n str {
        match *self {
            Directive::Format(node) => &node.arg_name,
            Directive::Message(node) => &node.arg_name,
        }
    }

    pub fn kind(&self) -> &'n str {
        match *self {
            Directive::Format(node) => &node.kind,
            Directive::Message(node) => &node.kind,
        }
    }

    /// Style token of a single-value directive.
    pub fn style(&self) -> Option<&'n str> {
        match *self {
            Directive::Format(node) => node.style.as_deref(),
            Directive::Message(_) => None,
        }
    }

    /// The sub-message node, or an error if this directive has no selectors.
    pub fn submessage(&self) -> Result<&'n MessageNode, FormatError> {
        match *self {
            Directive::Message(node) => Ok(node),
            Directive::Format(node) => Err(FormatError::InvalidStyle {
                kind: node.kind.clone(),
                style: node.style.clone().unwrap_or_default(),
            }),
        }
    }
}

/// Formats one kind of directive.
///
/// Implementations are stateless and shared by every render, so they must be
/// `Send + Sync`.
pub trait Formatter: Send + Sync {
    /// True if the directive's style is a set of selector-keyed sub-messages.
    fn is_submessage(&self) -> bool {
        false
    }

    /// True if `#` inside this formatter's sub-messages is its numeric argument.
    fn is_subnumeric(&self) -> bool {
        false
    }

    fn format<'n>(
        &self,
        ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError>;
}

/// Text a tag formatter places around a tag's children.
///
/// The renderer writes `open`, renders `children` in place and then writes
/// `close`, so directives inside a tag render like any other node.
#[derive(Debug, Clone, PartialEq)]
pub struct TagMarkup<'n> {
    pub open: String,
    pub children: &'n [Node],
    pub close: String,
}

impl<'n> TagMarkup<'n> {
    pub fn new(open: impl Into<String>, children: &'n [Node], close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            children,
            close: close.into(),
        }
    }

    /// Children with no surrounding markup.
    pub fn bare(children: &'n [Node]) -> Self {
        Self::new(String::new(), children, String::new())
    }
}

/// Formats inline tags, wrapping their children in markup.
pub trait TagFormatter: Send + Sync {
    fn format_tag<'n>(
        &self,
        ctx: &FormatContext<'_>,
        tag: &'n TagNode,
        args: &Args,
    ) -> Result<TagMarkup<'n>, FormatError>;
}

/// Look up a required argument.
pub fn argument<'a>(args: &'a Args, name: &str) -> Result<&'a Value, FormatError> {
    args.get(name).ok_or_else(|| FormatError::MissingArgument {
        name: name.to_string(),
    })
}

/// Look up a required argument and interpret it as a number.
pub fn numeric_argument(args: &Args, name: &str) -> Result<Numeric, FormatError> {
    let value = argument(args, name)?;
    value.to_numeric().ok_or_else(|| FormatError::InvalidArgument {
        name: name.to_string(),
        expected: "a number",
        found: value.type_name(),
    })
}

/// Pick the branch for `key`, falling back to `other`.
pub fn select_branch<'n>(node: &'n MessageNode, key: &str) -> Result<&'n [Node], FormatError> {
    node.branch(key)
        .or_else(|| node.branch(OTHER))
        .ok_or_else(|| {
            let available = node.keys();
            FormatError::MissingSelector {
                arg: node.arg_name.clone(),
                key: key.to_string(),
                suggestions: compute_suggestions(key, &available),
                available,
            }
        })
}
