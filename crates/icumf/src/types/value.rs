use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// A runtime value passed as a keyword argument when rendering a message.
///
/// The `Value` enum provides a small dynamic type system so callers can pass
/// numbers, strings and dates interchangeably through the same argument map.
///
/// # Example
///
/// ```
/// use icumf::Value;
///
/// // Integers become Value::Number
/// let count: Value = 42.into();
/// assert_eq!(count.as_number(), Some(42));
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number (used for plural selection).
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A calendar date with time of day.
    Date(NaiveDateTime),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a date, if it is one.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Interpret this value numerically.
    ///
    /// Numbers and floats are returned as-is; strings are accepted when they
    /// parse as an integer or a float. Dates are never numeric.
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            Value::Number(n) => Some(Numeric::Integer(*n)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            Value::String(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    Some(Numeric::Integer(n))
                } else {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(Numeric::Float)
                }
            }
            Value::Date(_) => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Date(_) => "date",
        }
    }
}

/// A value that has been interpreted as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    /// The value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(n) => n as f64,
            Numeric::Float(f) => f,
        }
    }

    /// The value as an integer when it has no fractional part.
    pub fn as_integral(self) -> Option<i64> {
        match self {
            Numeric::Integer(n) => Some(n),
            Numeric::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
            Numeric::Float(_) => None,
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Numeric::Integer(n) => write!(f, "{n}"),
            Numeric::Float(n) => write!(f, "{n}"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Values above `i64::MAX` become floats rather than wrapping.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(d: DateTime<Tz>) -> Self {
        Value::Date(d.naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_are_numbers() {
        assert_eq!(Value::from("12").to_numeric(), Some(Numeric::Integer(12)));
        assert_eq!(Value::from(" 2.5 ").to_numeric(), Some(Numeric::Float(2.5)));
        assert_eq!(Value::from("twelve").to_numeric(), None);
        assert_eq!(Value::from("NaN").to_numeric(), None);
    }

    #[test]
    fn integral_floats_collapse_to_integers() {
        assert_eq!(Numeric::Float(3.0).as_integral(), Some(3));
        assert_eq!(Numeric::Float(3.5).as_integral(), None);
        assert_eq!(Numeric::Integer(-4).as_integral(), Some(-4));
    }

    #[test]
    fn large_unsigned_values_do_not_wrap() {
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
        assert_eq!(Value::from(i64::MAX as u64), Value::Number(i64::MAX));
        assert_eq!(Value::from(7_usize), Value::Number(7));
    }

    #[test]
    fn dates_display_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-01-05T14:30:00");
    }
}
