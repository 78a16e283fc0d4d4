//! Contexts threaded through rendering.

use bon::Builder;

use crate::interpreter::plural::{PluralKind, PluralRules};

/// Translation context supplied by the caller's translation resolver.
///
/// The engine only reads it: formatters use the locale for plural rules, and
/// the path labels log records in non-strict mode.
pub trait TranslationContext {
    /// Locale code of the translation being rendered, e.g. `en` or `pt-BR`.
    fn locale(&self) -> &str;

    /// Dotted key of the message in the translation tree, if known.
    fn path(&self) -> Option<&str> {
        None
    }
}

/// A plain [`TranslationContext`] holding a locale and an optional path.
///
/// # Example
///
/// ```
/// use icumf::{LocaleContext, TranslationContext};
///
/// let ctx = LocaleContext::builder()
///     .locale("ru")
///     .path("cart.items".to_string())
///     .build();
///
/// assert_eq!(ctx.locale(), "ru");
/// assert_eq!(ctx.path(), Some("cart.items"));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct LocaleContext {
    #[builder(default = "en".to_string())]
    locale: String,

    path: Option<String>,
}

impl Default for LocaleContext {
    fn default() -> Self {
        LocaleContext::builder().build()
    }
}

impl LocaleContext {
    /// Create a context for a locale, without a path.
    pub fn new(locale: impl Into<String>) -> Self {
        LocaleContext::builder().locale(locale.into()).build()
    }
}

impl TranslationContext for LocaleContext {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// Everything a formatter may consult while formatting a directive.
pub struct FormatContext<'a> {
    translation: &'a dyn TranslationContext,
    plural_rules: &'a dyn PluralRules,
}

impl<'a> FormatContext<'a> {
    pub fn new(translation: &'a dyn TranslationContext, plural_rules: &'a dyn PluralRules) -> Self {
        Self {
            translation,
            plural_rules,
        }
    }

    pub fn locale(&self) -> &str {
        self.translation.locale()
    }

    pub fn path(&self) -> Option<&str> {
        self.translation.path()
    }

    /// Plural category of `n` in the current locale.
    pub fn plural_category(&self, kind: PluralKind, n: i64) -> &'static str {
        self.plural_rules.category(self.locale(), kind, n)
    }
}
