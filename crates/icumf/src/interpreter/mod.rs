//! Message rendering.
//!
//! This module holds the [`MessageFormat`] engine, which turns patterns into
//! compiled messages and renders them, together with the contexts, errors
//! and plural rules used while rendering.

mod context;
mod engine;
mod error;
mod plural;
mod renderer;

pub use context::{FormatContext, LocaleContext, TranslationContext};
pub use engine::{CompiledMessage, Message, MessageFormat, TagStyle};
pub use error::{ErrorKind, FormatError, compute_suggestions};
pub use plural::{
    CldrPluralRules, PluralKind, PluralRuleFn, PluralRuleTable, PluralRules, plural_category,
};
