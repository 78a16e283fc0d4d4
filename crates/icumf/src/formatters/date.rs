//! Date formatter backed by chrono.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use crate::formatters::{Directive, Formatted, Formatter, argument};
use crate::interpreter::{FormatContext, FormatError};
use crate::types::{Args, Value};

/// Formats a date argument according to a named style or a strftime pattern.
///
/// | style            | output                       |
/// |------------------|------------------------------|
/// | none, `medium`   | `Jan 5, 2024`                |
/// | `short`          | `2024-01-05`                 |
/// | `long`           | `January 5, 2024`            |
/// | `full`           | `Friday, January 5, 2024`    |
/// | `time`           | `14:30`                      |
/// | `datetime`       | `2024-01-05 14:30`           |
/// | `iso`            | `2024-01-05T14:30:00`        |
///
/// Any other style is read as a chrono strftime pattern, e.g. `%d.%m.%Y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter;

impl DateFormatter {
    fn pattern(style: Option<&str>) -> &str {
        match style {
            None | Some("medium") => "%b %-d, %Y",
            Some("short") => "%Y-%m-%d",
            Some("long") => "%B %-d, %Y",
            Some("full") => "%A, %B %-d, %Y",
            Some("time") => "%H:%M",
            Some("datetime") => "%Y-%m-%d %H:%M",
            Some("iso") => "%Y-%m-%dT%H:%M:%S",
            Some(custom) => custom,
        }
    }
}

impl Formatter for DateFormatter {
    fn format<'n>(
        &self,
        _ctx: &FormatContext<'_>,
        directive: Directive<'n>,
        args: &Args,
    ) -> Result<Formatted<'n>, FormatError> {
        let name = directive.arg_name();
        let date = match argument(args, name)? {
            Value::Date(date) => *date,
            other => {
                return Err(FormatError::InvalidArgument {
                    name: name.to_string(),
                    expected: "a date",
                    found: other.type_name(),
                });
            }
        };

        let invalid_style = || FormatError::InvalidStyle {
            kind: directive.kind().to_string(),
            style: directive.style().unwrap_or_default().to_string(),
        };

        let items: Vec<Item<'_>> = StrftimeItems::new(Self::pattern(directive.style())).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid_style());
        }

        let mut text = String::new();
        write!(text, "{}", date.format_with_items(items.iter())).map_err(|_| invalid_style())?;
        Ok(Formatted::Final(text))
    }
}
