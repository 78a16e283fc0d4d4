//! The caller-facing message format engine.

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use tracing::{trace, warn};

use crate::formatters::{FormatterRegistry, HtmlTags, MarkdownTags, TagFormatter};
use crate::interpreter::renderer::Renderer;
use crate::interpreter::{
    CldrPluralRules, FormatContext, FormatError, PluralRules, TranslationContext,
};
use crate::parser::{Node, needs_parsing, parse_message, strip_force_prefix};
use crate::types::Args;

/// Markup flavour produced for inline tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagStyle {
    /// `<b>text</b>`
    #[default]
    Html,
    /// `**text**`
    Markdown,
}

/// Compiles message patterns and renders them against a translation context.
///
/// The engine is immutable once built and can be shared between threads.
///
/// # Error policy
///
/// A strict engine returns every failure as an `Err`. A non-strict engine
/// never fails: a pattern that does not parse is returned verbatim, and a
/// directive that cannot be formatted is logged and renders as nothing.
///
/// # Example
///
/// ```
/// use icumf::{LocaleContext, MessageFormat, args};
///
/// let engine = MessageFormat::builder().strict(true).build();
/// let ctx = LocaleContext::new("en");
///
/// let text = engine
///     .format("{n, plural, one {# file} other {# files}}", &ctx, &args! { "n" => 2 })
///     .unwrap();
/// assert_eq!(text, "2 files");
/// ```
#[derive(Builder)]
pub struct MessageFormat {
    /// Return errors instead of logging them.
    #[builder(default)]
    strict: bool,

    /// Markup used by the built-in tag formatters.
    #[builder(default)]
    tag_style: TagStyle,

    /// Custom tag formatter, replacing the one selected by `tag_style`.
    tag_formatter: Option<Box<dyn TagFormatter>>,

    /// Directive formatters by kind.
    #[builder(default)]
    formatters: FormatterRegistry,

    /// Plural category strategy used by `plural` and `selectordinal`.
    #[builder(default = default_plural_rules())]
    plural_rules: Arc<dyn PluralRules>,
}

fn default_plural_rules() -> Arc<dyn PluralRules> {
    Arc::new(CldrPluralRules)
}

impl Default for MessageFormat {
    fn default() -> Self {
        MessageFormat::builder().build()
    }
}

impl fmt::Debug for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFormat")
            .field("strict", &self.strict)
            .field("tag_style", &self.tag_style)
            .field("custom_tag_formatter", &self.tag_formatter.is_some())
            .field("formatters", &self.formatters.kinds())
            .finish_non_exhaustive()
    }
}

impl MessageFormat {
    /// Create a non-strict engine with the built-in formatters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn tag_style(&self) -> TagStyle {
        self.tag_style
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    fn tags(&self) -> &dyn TagFormatter {
        match (&self.tag_formatter, self.tag_style) {
            (Some(custom), _) => custom.as_ref(),
            (None, TagStyle::Html) => &HtmlTags,
            (None, TagStyle::Markdown) => &MarkdownTags,
        }
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    /// Parse a pattern, or pass it through if it contains no directives.
    ///
    /// Patterns starting with `icu:` are always parsed, with the prefix
    /// removed. Other patterns are parsed only when they contain a directive
    /// or tag opening.
    ///
    /// In non-strict mode a pattern that fails to parse is logged and
    /// returned unchanged, prefix included, as [`Message::Plain`].
    pub fn parse(&self, pattern: &str) -> Result<Message<'_>, FormatError> {
        let source = match strip_force_prefix(pattern) {
            Some(rest) => rest,
            None if needs_parsing(pattern) => pattern,
            None => return Ok(Message::Plain(pattern.to_string())),
        };
        match self.parse_nodes(source) {
            Ok(nodes) => Ok(Message::Compiled(self.compile(nodes))),
            Err(err) if self.strict => Err(err),
            Err(err) => {
                warn!(error = %err, pattern, "failed to parse message, using it verbatim");
                Ok(Message::Plain(pattern.to_string()))
            }
        }
    }

    /// Parse a pattern into nodes without sniffing or prefix handling.
    pub fn parse_nodes(&self, pattern: &str) -> Result<Vec<Node>, FormatError> {
        Ok(parse_message(pattern, &self.formatters)?)
    }

    /// Wrap parsed nodes for repeated rendering.
    pub fn compile(&self, nodes: Vec<Node>) -> CompiledMessage<'_> {
        trace!(nodes = nodes.len(), "compiled message");
        CompiledMessage {
            engine: self,
            nodes,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render nodes with the given context and arguments.
    pub fn render(
        &self,
        ctx: &dyn TranslationContext,
        nodes: &[Node],
        args: &Args,
    ) -> Result<String, FormatError> {
        let renderer = Renderer {
            formatters: &self.formatters,
            tags: self.tags(),
            ctx: FormatContext::new(ctx, self.plural_rules.as_ref()),
            args,
            strict: self.strict,
        };
        renderer.render(nodes)
    }

    /// Parse and render a pattern in one step.
    pub fn format(
        &self,
        pattern: &str,
        ctx: &dyn TranslationContext,
        args: &Args,
    ) -> Result<String, FormatError> {
        self.parse(pattern)?.render(ctx, args)
    }
}

/// Result of [`MessageFormat::parse`].
#[derive(Debug, Clone)]
pub enum Message<'e> {
    /// Text with no directives, rendered as-is.
    Plain(String),
    /// A parsed pattern.
    Compiled(CompiledMessage<'e>),
}

impl Message<'_> {
    pub fn render(&self, ctx: &dyn TranslationContext, args: &Args) -> Result<String, FormatError> {
        match self {
            Message::Plain(text) => Ok(text.clone()),
            Message::Compiled(compiled) => compiled.render(ctx, args),
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, Message::Compiled(_))
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Message::Plain(text) => Some(text),
            Message::Compiled(_) => None,
        }
    }

    pub fn as_compiled(&self) -> Option<&CompiledMessage<'_>> {
        match self {
            Message::Plain(_) => None,
            Message::Compiled(compiled) => Some(compiled),
        }
    }
}

/// A parsed pattern bound to the engine that parsed it.
#[derive(Clone)]
pub struct CompiledMessage<'e> {
    engine: &'e MessageFormat,
    nodes: Vec<Node>,
}

impl CompiledMessage<'_> {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn render(&self, ctx: &dyn TranslationContext, args: &Args) -> Result<String, FormatError> {
        self.engine.render(ctx, &self.nodes, args)
    }
}

impl fmt::Debug for CompiledMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMessage")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::formatters::TagMarkup;
    use crate::interpreter::LocaleContext;
    use crate::parser::TagNode;
    use crate::types::Value;

    fn args(pairs: &[(&str, Value)]) -> Args {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect()
    }

    #[test]
    #[traced_test]
    fn parse_failure_is_logged_in_lenient_mode() {
        let engine = MessageFormat::new();
        let message = engine.parse("{n, plural, one {x}").unwrap();
        assert_eq!(message.as_plain(), Some("{n, plural, one {x}"));
        assert!(logs_contain("failed to parse message"));
    }

    #[test]
    #[traced_test]
    fn directive_failure_is_logged_with_path() {
        let engine = MessageFormat::new();
        let ctx = LocaleContext::builder()
            .locale("en")
            .path("inbox.count".to_string())
            .build();
        let text = engine
            .format("You have {n, count} messages", &ctx, &Args::new())
            .unwrap();
        assert_eq!(text, "You have  messages");
        assert!(logs_contain("failed to format directive"));
        assert!(logs_contain("inbox.count"));
        assert!(logs_contain("missing argument 'n'"));
    }

    #[test]
    #[traced_test]
    fn strict_mode_does_not_log() {
        let engine = MessageFormat::builder().strict(true).build();
        let ctx = LocaleContext::default();
        let err = engine
            .format("{n, count}", &ctx, &args(&[("n", Value::from("many"))]))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument { .. }));
        assert!(!logs_contain("failed to format directive"));
    }

    #[test]
    fn custom_tag_formatter_overrides_style() {
        struct Strip;
        impl TagFormatter for Strip {
            fn format_tag<'n>(
                &self,
                _ctx: &FormatContext<'_>,
                tag: &'n TagNode,
                _args: &Args,
            ) -> Result<TagMarkup<'n>, FormatError> {
                Ok(TagMarkup::bare(&tag.children))
            }
        }

        let engine = MessageFormat::builder()
            .tag_style(TagStyle::Markdown)
            .tag_formatter(Box::new(Strip))
            .build();
        let text = engine
            .format("<b>bold</b>", &LocaleContext::default(), &Args::new())
            .unwrap();
        assert_eq!(text, "bold");
    }
}
