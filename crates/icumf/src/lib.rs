pub mod formatters;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use formatters::{Formatted, Formatter, FormatterRegistry, TagFormatter, TagMarkup};
pub use interpreter::{
    CompiledMessage, ErrorKind, FormatError, LocaleContext, Message, MessageFormat, PluralKind,
    TagStyle, TranslationContext,
};
pub use parser::{Node, ParseError};
pub use types::{Args, Value};

/// Creates an [`Args`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings and
/// chrono dates can be passed directly.
///
/// # Example
///
/// ```
/// use icumf::args;
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(3));
/// assert_eq!(a["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        $crate::Args::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Args::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
