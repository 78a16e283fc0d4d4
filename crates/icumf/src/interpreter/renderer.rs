//! Node rendering.
//!
//! A single left-to-right pass over the node sequence. Text is appended,
//! directives are dispatched to the formatter registered for their kind and
//! tags go to the configured tag formatter. Nodes a formatter hands back are
//! rendered with the same context and arguments.

use tracing::error;

use crate::formatters::{Directive, Formatted, FormatterRegistry, TagFormatter};
use crate::interpreter::{FormatContext, FormatError};
use crate::parser::Node;
use crate::types::Args;

/// Kind reported in logs for tag failures.
const TAG_KIND: &str = "tag";

/// Renders nodes against one context and argument set.
pub(crate) struct Renderer<'a> {
    pub(crate) formatters: &'a FormatterRegistry,
    pub(crate) tags: &'a dyn TagFormatter,
    pub(crate) ctx: FormatContext<'a>,
    pub(crate) args: &'a Args,
    pub(crate) strict: bool,
}

impl Renderer<'_> {
    pub(crate) fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
        let mut out = String::new();
        self.render_into(nodes, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, nodes: &[Node], out: &mut String) -> Result<(), FormatError> {
        for node in nodes {
            self.render_node(node, out)?;
        }
        Ok(())
    }

    fn render_node(&self, node: &Node, out: &mut String) -> Result<(), FormatError> {
        match node {
            Node::Text(text) => {
                out.push_str(text);
                Ok(())
            }
            Node::Format(format) => {
                let directive = Directive::Format(format);
                let result = self.dispatch(directive);
                self.emit(result, directive.arg_name(), directive.kind(), out)
            }
            Node::Message(message) => {
                let directive = Directive::Message(message);
                let result = self.dispatch(directive);
                self.emit(result, directive.arg_name(), directive.kind(), out)
            }
            Node::Tag(tag) => match self.tags.format_tag(&self.ctx, tag, self.args) {
                Ok(markup) => {
                    out.push_str(&markup.open);
                    self.render_into(markup.children, out)?;
                    out.push_str(&markup.close);
                    Ok(())
                }
                Err(err) => self.recover(err, &tag.tag, TAG_KIND),
            },
        }
    }

    fn dispatch<'n>(&self, directive: Directive<'n>) -> Result<Formatted<'n>, FormatError> {
        let formatter =
            self.formatters
                .get(directive.kind())
                .ok_or_else(|| FormatError::UnknownFormatter {
                    kind: directive.kind().to_string(),
                    arg: directive.arg_name().to_string(),
                })?;
        formatter.format(&self.ctx, directive, self.args)
    }

    fn emit(
        &self,
        result: Result<Formatted<'_>, FormatError>,
        arg: &str,
        kind: &str,
        out: &mut String,
    ) -> Result<(), FormatError> {
        match result {
            Ok(Formatted::Final(text)) => {
                out.push_str(&text);
                Ok(())
            }
            Ok(Formatted::Continue(nodes)) => self.render_into(&nodes, out),
            Err(err) => self.recover(err, arg, kind),
        }
    }

    /// Strict mode propagates the error. Otherwise it is logged and the
    /// failed node contributes nothing.
    fn recover(&self, err: FormatError, arg: &str, kind: &str) -> Result<(), FormatError> {
        if self.strict {
            return Err(err);
        }
        error!(
            path = self.ctx.path().unwrap_or_default(),
            arg,
            kind,
            error = %err,
            "failed to format directive"
        );
        Ok(())
    }
}
