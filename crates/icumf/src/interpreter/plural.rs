//! CLDR plural category resolution.
//!
//! Plural categories are looked up through the [`PluralRules`] strategy so
//! that locales can be added or overridden without touching the formatters.
//! English has "one" and "other", Russian has "one", "few", "many" and
//! "other", and Arabic uses all six categories. Ordinal rules map 1st, 2nd,
//! 3rd, 4th to "one", "two", "few" and "other" in English.
//!
//! ICU plural rules are cached per thread per parsed locale and rule type. The cache
//! is initialized lazily on first access within each thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules as IcuPluralRules};

/// Which set of plural rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralKind {
    /// Counting rules: 1 item, 2 items.
    Cardinal,
    /// Ranking rules: 1st, 2nd, 3rd, 4th.
    Ordinal,
}

/// Strategy mapping a number to a plural category for a locale.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
pub trait PluralRules: Send + Sync {
    fn category(&self, locale: &str, kind: PluralKind, n: i64) -> &'static str;
}

/// Plural rules backed by the CLDR data compiled into `icu_plurals`.
///
/// Locale codes may use `-` or `_` separators. Codes that do not parse as a
/// locale fall back to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrPluralRules;

impl PluralRules for CldrPluralRules {
    fn category(&self, locale: &str, kind: PluralKind, n: i64) -> &'static str {
        plural_category(locale, kind, n)
    }
}

thread_local! {
    /// Per-thread cache of ICU rules keyed by parsed locale and kind.
    static PLURAL_RULES_CACHE: RefCell<HashMap<(Locale, PluralKind), IcuPluralRules>> =
        RefCell::new(HashMap::new());
}

/// Get the CLDR plural category for a number in a given locale.
///
/// # Examples
///
/// ```
/// use icumf::interpreter::{PluralKind, plural_category};
///
/// // English: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", PluralKind::Cardinal, 1), "one");
/// assert_eq!(plural_category("en", PluralKind::Cardinal, 2), "other");
///
/// // Russian: "one", "few", "many"
/// assert_eq!(plural_category("ru", PluralKind::Cardinal, 2), "few");
/// assert_eq!(plural_category("ru", PluralKind::Cardinal, 5), "many");
///
/// // English ordinals: 1st, 2nd, 3rd, 4th
/// assert_eq!(plural_category("en", PluralKind::Ordinal, 3), "few");
/// ```
pub fn plural_category(locale: &str, kind: PluralKind, n: i64) -> &'static str {
    let key = (resolve_locale(locale), kind);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        let rules = cache
            .entry(key)
            .or_insert_with_key(|(locale, kind)| build_rules(locale, *kind));
        category_str(rules.category_for(n))
    })
}

/// Normalize `pt_BR` style codes to BCP-47 `pt-BR`.
fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-")
}

/// Parse a locale code. Codes that do not parse resolve to English, so they
/// all share one cache entry.
fn resolve_locale(locale: &str) -> Locale {
    normalize_locale(locale)
        .parse::<Locale>()
        .unwrap_or_else(|_| locale!("en"))
}

/// Build ICU rules for a locale, falling back to English.
fn build_rules(locale: &Locale, kind: PluralKind) -> IcuPluralRules {
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    IcuPluralRules::try_new(locale.into(), rule_type.into())
        .unwrap_or_else(|_| english_rules(rule_type))
}

fn english_rules(rule_type: PluralRuleType) -> IcuPluralRules {
    IcuPluralRules::try_new(locale!("en").into(), rule_type.into())
        .expect("English plural rules are compiled in")
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// A hand-written category function for one locale and rule type.
pub type PluralRuleFn = fn(i64) -> &'static str;

/// Per-locale plural rule overrides with a fallback strategy.
///
/// Lookups try the full locale code first (`pt-br`), then its language
/// (`pt`), then defer to the fallback.
///
/// # Example
///
/// ```
/// use icumf::interpreter::{PluralKind, PluralRuleTable, PluralRules};
///
/// fn pirate(n: i64) -> &'static str {
///     if n == 0 { "zero" } else { "other" }
/// }
///
/// let rules = PluralRuleTable::cldr().with_rule("x-pirate", PluralKind::Cardinal, pirate);
/// assert_eq!(rules.category("x-pirate", PluralKind::Cardinal, 0), "zero");
/// assert_eq!(rules.category("en", PluralKind::Cardinal, 1), "one");
/// ```
pub struct PluralRuleTable {
    rules: HashMap<(String, PluralKind), PluralRuleFn>,
    fallback: Arc<dyn PluralRules>,
}

impl PluralRuleTable {
    /// Create an empty table deferring to `fallback`.
    pub fn new(fallback: Arc<dyn PluralRules>) -> Self {
        Self {
            rules: HashMap::new(),
            fallback,
        }
    }

    /// Create an empty table deferring to [`CldrPluralRules`].
    pub fn cldr() -> Self {
        Self::new(Arc::new(CldrPluralRules))
    }

    /// Register a rule, replacing any previous rule for the same locale and kind.
    pub fn insert(&mut self, locale: &str, kind: PluralKind, rule: PluralRuleFn) {
        self.rules.insert((table_key(locale), kind), rule);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_rule(mut self, locale: &str, kind: PluralKind, rule: PluralRuleFn) -> Self {
        self.insert(locale, kind, rule);
        self
    }

    fn lookup(&self, locale: &str, kind: PluralKind) -> Option<PluralRuleFn> {
        let key = table_key(locale);
        if let Some(rule) = self.rules.get(&(key.clone(), kind)) {
            return Some(*rule);
        }
        let language = key.split('-').next().unwrap_or_default();
        self.rules.get(&(language.to_string(), kind)).copied()
    }
}

impl PluralRules for PluralRuleTable {
    fn category(&self, locale: &str, kind: PluralKind, n: i64) -> &'static str {
        match self.lookup(locale, kind) {
            Some(rule) => rule(n),
            None => self.fallback.category(locale, kind, n),
        }
    }
}

fn table_key(locale: &str) -> String {
    normalize_locale(locale).to_ascii_lowercase()
}
