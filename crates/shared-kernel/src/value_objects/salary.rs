// crates/shared-kernel/src/value_objects/salary.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Canonical, non-negative salary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(u64);

impl Salary {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parses a numeric string: one or more ASCII digits, nothing else.
    ///
    /// Signs, decimal points and surrounding whitespace are rejected, as are
    /// digit strings too large for `u64`.
    pub fn parse_numeric(text: &str) -> Option<Self> {
        if is_numeric_text(text) { text.parse().ok().map(Self) } else { None }
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Salary {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Salary> for u64 {
    fn from(value: Salary) -> Self {
        value.0
    }
}

/// Returns true when `text` is a non-empty run of ASCII digits.
#[inline]
pub fn is_numeric_text(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// A salary as supplied by a caller or a job record: either an integer or a
/// string that is expected to hold one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryValue {
    Integer(i64),
    Text(String),
}

impl SalaryValue {
    /// Converts the value into a canonical [`Salary`].
    ///
    /// Fails with [`DomainError::InvalidSalaryType`] for negative integers and
    /// for strings that are not numeric.
    pub fn normalize(&self) -> DomainResult<Salary> {
        match self {
            Self::Integer(n) => u64::try_from(*n).map(Salary).map_err(|_| self.invalid_type()),
            Self::Text(text) => Salary::parse_numeric(text).ok_or_else(|| self.invalid_type()),
        }
    }

    fn invalid_type(&self) -> DomainError {
        DomainError::InvalidSalaryType { value: self.to_string() }
    }
}

impl fmt::Display for SalaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for SalaryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SalaryValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for SalaryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for SalaryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SalaryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Salary> for SalaryValue {
    fn from(value: Salary) -> Self {
        match i64::try_from(value.0) {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Text(value.0.to_string()),
        }
    }
}

/// Dynamic boundary: only JSON integers and strings are salary values.
impl TryFrom<&serde_json::Value> for SalaryValue {
    type Error = DomainError;

    fn try_from(value: &serde_json::Value) -> DomainResult<Self> {
        match value {
            serde_json::Value::String(text) => Ok(Self::Text(text.clone())),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Ok(Self::Integer(i)),
                (None, Some(u)) => Ok(Self::Text(u.to_string())),
                (None, None) => Err(DomainError::InvalidSalaryType { value: n.to_string() }),
            },
            other => Err(DomainError::InvalidSalaryType { value: other.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_accepts_digits_only() {
        assert!(is_numeric_text("0"));
        assert!(is_numeric_text("0090000"));
        assert!(!is_numeric_text(""));
        assert!(!is_numeric_text("-5"));
        assert!(!is_numeric_text("+5"));
        assert!(!is_numeric_text("5.0"));
        assert!(!is_numeric_text(" 5"));
        assert!(!is_numeric_text("٣"));
    }

    #[test]
    fn parse_numeric_rejects_overflow() {
        assert_eq!(Salary::parse_numeric("18446744073709551615"), Some(Salary::new(u64::MAX)));
        assert_eq!(Salary::parse_numeric("18446744073709551616"), None);
    }

    #[test]
    fn normalize_integer_and_text() {
        assert_eq!(SalaryValue::from(7).normalize().unwrap(), Salary::new(7));
        assert_eq!(SalaryValue::from("90000").normalize().unwrap(), Salary::new(90_000));
    }

    #[test]
    fn normalize_rejects_negative_integer() {
        let err = SalaryValue::from(-1).normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidSalaryType { ref value } if value == "-1"));
    }

    #[test]
    fn normalize_rejects_non_numeric_text() {
        let err = SalaryValue::from("abc").normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidSalaryType { .. }));
    }

    #[test]
    fn salary_round_trips_into_value() {
        let big = Salary::new(u64::MAX);
        assert_eq!(SalaryValue::from(big).normalize().unwrap(), big);
        assert_eq!(SalaryValue::from(Salary::new(12)), SalaryValue::Integer(12));
    }
}
