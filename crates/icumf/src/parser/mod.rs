//! Message pattern parser.
//!
//! This module provides sniffing (deciding whether a string needs parsing at
//! all) and the pattern grammar itself. The parser produces an AST that is
//! rendered by the interpreter or inspected by external tooling.

pub mod ast;
pub mod error;
mod message;
mod sniff;

pub use ast::*;
pub use error::ParseError;
pub use message::{DirectiveKinds, parse_message};
pub use sniff::{FORCE_PREFIX, needs_parsing, strip_force_prefix};
