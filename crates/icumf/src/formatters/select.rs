//! Sub-message formatters: `plural`, `selectordinal` and `select`.
//!
//! Each picks one branch of a [`MessageNode`](crate::parser::MessageNode) and
//! hands its nodes back to the renderer, so directives nested inside the
//! branch render with the same arguments.

use std::borrow::Cow;

use crate::formatters::{
    Directive, Formatted, Formatter, OTHER, argument, numeric_argument, select_branch,
};
use crate::interpreter::{FormatContext, FormatError, PluralKind};
use crate::types::{Args, Value};

/// Selects a branch by plural category of a numeric argument.
///
/// Resolution order:
/// 1. An exact selector such as `=0` equal to the argument
/// 2. The plural category of the argument in the context locale
/// 3. `other`
///
/// Non-integral numbers have category `other`.
#[derive(Debug, Clone, Copy)]
pub struct PluralFormatter {
    kind: PluralKind,
}

impl PluralFormatter {
    /// Counting rules, registered as `plural`.
    pub fn cardinal() -> Self {
        Self {
            kind: PluralKind::Cardinal,
        }
    }

    /// Ranking rules, registered as `selectordinal`.
    pub fn ordinal() -> Self {
        Self {
            kind: PluralKind::Ordinal,
        }
    }
}

impl Formatter for PluralFormatter {
    fn is_submessage(&self) -> bool {
        true
    }

    fn is_subnumeric(&self) -> bool {
        true
    }

    fn format<'n>(
        &self,
        ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let node = directive.submessage()?;
        let n = numeric_argument(args, &node.arg_name)?;

        if let Some(branch) = node.exact_branch(n.as_f64()) {
            return Ok(Formatted::Continue(Cow::Borrowed(branch)));
        }

        let category = match n.as_integral() {
            Some(i) => ctx.plural_category(self.kind, i),
            None => OTHER,
        };
        let branch = select_branch(node, category)?;
        Ok(Formatted::Continue(Cow::Borrowed(branch)))
    }
}

/// Selects a branch whose key equals the argument, falling back to `other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFormatter;

impl Formatter for SelectFormatter {
    fn is_submessage(&self) -> bool {
        true
    }

    fn format<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let node = directive.submessage()?;
        let branch = match argument(args, &node.arg_name)? {
            Value::String(key) => select_branch(node, key)?,
            other => select_branch(node, &other.to_string())?,
        };
        Ok(Formatted::Continue(Cow::Borrowed(branch)))
    }
}
