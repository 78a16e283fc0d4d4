mod value;

use std::collections::HashMap;

pub use value::{Numeric, Value};

/// Keyword arguments of a render, keyed by argument name.
pub type Args = HashMap<String, Value>;
