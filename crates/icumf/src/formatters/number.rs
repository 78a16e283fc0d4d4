//! Single-value formatters: `count`, `number` and bare `{name}` arguments.

use crate::formatters::{Directive, Formatted, Formatter, argument, numeric_argument};
use crate::interpreter::{FormatContext, FormatError};
use crate::types::{Args, Numeric};

/// Formats a numeric argument as plain digits. Also backs `#` in plurals.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountFormatter;

impl Formatter for CountFormatter {
    fn format<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let n = numeric_argument(args, directive.arg_name())?;
        Ok(Formatted::Final(n.to_string()))
    }
}

/// Formats a numeric argument with an optional `integer` or `percent` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl Formatter for NumberFormatter {
    fn format<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let n = numeric_argument(args, directive.arg_name())?;
        let text = match directive.style() {
            None => n.to_string(),
            Some("integer") => round(n.as_f64()).to_string(),
            Some("percent") => format!("{}%", round(n.as_f64() * 100.0)),
            Some(style) => {
                return Err(FormatError::InvalidStyle {
                    kind: directive.kind().to_string(),
                    style: style.to_string(),
                });
            }
        };
        Ok(Formatted::Final(text))
    }
}

/// Round half away from zero, keeping integers exact.
fn round(n: f64) -> Numeric {
    let rounded = n.round();
    Numeric::Float(rounded)
        .as_integral()
        .map_or(Numeric::Float(rounded), Numeric::Integer)
}

/// Formats any argument with its display form. Handles bare `{name}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFormatter;

impl Formatter for ValueFormatter {
    fn format<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let value = argument(args, directive.arg_name())?;
        Ok(Formatted::Final(value.to_string()))
    }
}
