use std::fmt::{Display, Formatter};

/// A numeric scalar.
///
/// Non-negative integers that fit in `i64` are always stored as
/// `Integer`, so a number compares equal no matter which decoder
/// produced it. `Unsigned` only holds values above `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    pub fn from_u64(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Number::Integer(n),
            Err(_) => Number::Unsigned(n),
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    /// Returns false for NaN and the infinities.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Unsigned(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Unsigned(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::from_u64(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Number;

    #[rstest(
        input,
        expected,
        case(0, Number::Integer(0)),
        case(i64::MAX as u64, Number::Integer(i64::MAX)),
        case(i64::MAX as u64 + 1, Number::Unsigned(9_223_372_036_854_775_808)),
        case(u64::MAX, Number::Unsigned(u64::MAX))
    )]
    fn test_from_u64(input: u64, expected: Number) {
        assert_eq!(expected, Number::from_u64(input));
    }

    #[rstest(
        input,
        expected,
        case(Number::Integer(-7), "-7"),
        case(Number::Unsigned(u64::MAX), "18446744073709551615"),
        case(Number::Float(1.5), "1.5")
    )]
    fn test_display(input: Number, expected: &str) {
        assert_eq!(expected, input.to_string());
    }

    #[rstest(
        input,
        expected,
        case(Number::Integer(1), true),
        case(Number::Float(1.0), true),
        case(Number::Float(f64::NAN), false),
        case(Number::Float(f64::INFINITY), false),
        case(Number::Float(f64::NEG_INFINITY), false)
    )]
    fn test_is_finite(input: Number, expected: bool) {
        assert_eq!(expected, input.is_finite());
    }

    #[rstest(
        input,
        expected_i64,
        expected_f64,
        case(Number::Integer(-3), Some(-3), -3.0),
        case(Number::Unsigned(1 << 63), None, 9_223_372_036_854_775_808.0),
        case(Number::Float(0.5), None, 0.5)
    )]
    fn test_as_i64_and_as_f64(input: Number, expected_i64: Option<i64>, expected_f64: f64) {
        assert_eq!(expected_i64, input.as_i64());
        assert_eq!(expected_f64, input.as_f64());
    }
}
