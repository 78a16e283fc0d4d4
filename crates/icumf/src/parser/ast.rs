//! Public AST types for parsed message patterns.
//!
//! These types are public so that tooling (linters, extractors, custom
//! formatters) can inspect a pattern without rendering it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Directive kind assigned to a bare `{name}` argument.
pub const VALUE_KIND: &str = "value";

/// Directive kind assigned to `#` inside a numeric sub-message.
pub const COUNT_KIND: &str = "count";

/// A single element of a parsed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Literal text, rendered verbatim.
    Text(String),
    /// A single-value directive: `{name, kind, style}`.
    Format(FormatNode),
    /// A sub-message directive: `{name, plural, one {...} other {...}}`.
    Message(MessageNode),
    /// Inline markup: `<b>...</b>`.
    Tag(TagNode),
}

impl Node {
    /// Shorthand for a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

/// A directive that formats one argument, e.g. `{when, date, short}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatNode {
    /// Name of the keyword argument.
    pub arg_name: String,
    /// Formatter dispatch key (`count`, `date`, `value`, ...).
    pub kind: String,
    /// Optional style token following the kind.
    pub style: Option<String>,
}

/// A directive whose style is a set of selector-keyed nested messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageNode {
    pub arg_name: String,
    pub kind: String,
    /// Selector key (`one`, `other`, `=0`, `male`) to branch contents.
    pub selectors: BTreeMap<String, Vec<Node>>,
}

impl MessageNode {
    /// Branch for a selector key, if present.
    pub fn branch(&self, key: &str) -> Option<&[Node]> {
        self.selectors.get(key).map(Vec::as_slice)
    }

    /// Branch selected by an exact numeric selector such as `=0`.
    pub fn exact_branch(&self, n: f64) -> Option<&[Node]> {
        self.selectors.iter().find_map(|(key, nodes)| {
            let literal = key.strip_prefix('=')?.parse::<f64>().ok()?;
            (literal == n).then_some(nodes.as_slice())
        })
    }

    /// Selector keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.selectors.keys().cloned().collect()
    }
}

/// An inline tag with attributes and nested content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    pub tag: String,
    /// Attribute values by name; `None` for a bare attribute such as `hidden`.
    pub attributes: BTreeMap<String, Option<String>>,
    pub children: Vec<Node>,
}
