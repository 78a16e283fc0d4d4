//! Formatter registry keyed by directive kind.

use std::collections::HashMap;

use tracing::debug;

use crate::formatters::{
    CountFormatter, DateFormatter, Formatter, NumberFormatter, PluralFormatter, SelectFormatter,
    ValueFormatter,
};
use crate::parser::{COUNT_KIND, DirectiveKinds, VALUE_KIND};

/// Registry of formatters, keyed by the directive kind they handle.
///
/// Built once when an engine is constructed and only read afterwards, so a
/// single registry serves any number of concurrent renders.
///
/// # Example
///
/// ```
/// use icumf::formatters::FormatterRegistry;
///
/// let registry = FormatterRegistry::with_defaults();
/// assert!(registry.has_formatter("plural"));
/// assert!(!registry.has_formatter("currency"));
/// ```
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a registry with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: HashMap::new(),
        }
    }

    /// Create a registry with the built-in formatters:
    /// `count`, `number`, `value`, `plural`, `select`, `selectordinal`, `date`.
    pub fn with_defaults() -> Self {
        Self::empty()
            .with(COUNT_KIND, CountFormatter)
            .with("number", NumberFormatter)
            .with(VALUE_KIND, ValueFormatter)
            .with("plural", PluralFormatter::cardinal())
            .with("select", SelectFormatter)
            .with("selectordinal", PluralFormatter::ordinal())
            .with("date", DateFormatter)
    }

    /// Register a formatter for `kind`, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        formatter: impl Formatter + 'static,
    ) -> Option<Box<dyn Formatter>> {
        let kind = kind.into();
        let previous = self.formatters.insert(kind.clone(), Box::new(formatter));
        debug!(kind = %kind, replaced = previous.is_some(), "registered formatter");
        previous
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, kind: impl Into<String>, formatter: impl Formatter + 'static) -> Self {
        self.register(kind, formatter);
        self
    }

    /// Get the formatter for a directive kind.
    pub fn get(&self, kind: &str) -> Option<&dyn Formatter> {
        self.formatters.get(kind).map(Box::as_ref)
    }

    /// Check if a formatter exists for a directive kind.
    pub fn has_formatter(&self, kind: &str) -> bool {
        self.formatters.contains_key(kind)
    }

    /// Registered kinds in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DirectiveKinds for FormatterRegistry {
    fn is_submessage(&self, kind: &str) -> bool {
        self.get(kind).is_some_and(Formatter::is_submessage)
    }

    fn is_subnumeric(&self, kind: &str) -> bool {
        self.get(kind).is_some_and(Formatter::is_subnumeric)
    }
}
